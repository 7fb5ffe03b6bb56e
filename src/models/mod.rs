pub mod analytics;
pub mod client;
pub mod content;
pub mod document;
pub mod pricing;
