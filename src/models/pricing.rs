use serde::{Deserialize, Serialize};

/// Current price for a client and when it is due, as `DD/MM/YYYY`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    pub amount: f64,
    pub due_date: String,
}

/// Body for POST /pricing_billing.
#[derive(Debug, Default, Deserialize)]
pub struct PricingForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub amount: String,
}
