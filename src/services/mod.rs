pub mod analytics;
pub mod metrics;
pub mod pricing;
pub mod sections;
pub mod validation;
