use serde::{Deserialize, Serialize};

/// A monetary amount as the API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code (e.g., "EUR")
    pub currency: String,
    /// Decimal value with the currency's precision (e.g., "10.00")
    pub value: String,
}

impl Amount {
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_amount() {
        let amount: Amount = serde_json::from_str(r#"{"currency":"EUR","value":"-35.07"}"#).unwrap();
        assert_eq!(amount, Amount::new("EUR", "-35.07"));
    }

    #[test]
    fn display_amount() {
        assert_eq!(Amount::new("USD", "10.00").to_string(), "10.00 USD");
    }
}
