use chrono::{Datelike, NaiveDate};

use crate::{
    models::{client::Client, document::Document, pricing::PricingForm},
    services::validation::{parse_client, ValidationError},
};

pub struct PricingService;

impl PricingService {
    /// Amount must be a finite, non-negative number.
    pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
        let amount: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(amount)
    }

    /// Billing date: the 30th of the month after `today`, as `DD/MM/YYYY`.
    ///
    /// The day is not checked against the calendar, so a January request is
    /// due on "30/02/YYYY".
    pub fn due_date_from(today: NaiveDate) -> String {
        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        format!("30/{month:02}/{year:04}")
    }

    /// Overwrite the client's price and due date. Returns the client and the
    /// due date that was set.
    pub fn set_price(
        doc: &mut Document,
        form: &PricingForm,
        today: NaiveDate,
    ) -> Result<(Client, String), ValidationError> {
        let client = parse_client(&form.client)?;
        let amount = Self::parse_amount(&form.amount)?;
        let due_date = Self::due_date_from(today);

        let pricing = doc.pricing.entry(client).or_default();
        pricing.amount = amount;
        pricing.due_date = due_date.clone();
        Ok((client, due_date))
    }
}
