use serde::Deserialize;

use crate::market::goldapi::errors::ProviderError;

/// Subset of the GoldAPI `/{symbol}/{currency}` body we rely on.
/// Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct SpotEnvelope {
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

/// Validated spot price per fine troy ounce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotQuote {
    pub price_per_ounce: f64,
}

impl SpotEnvelope {
    /// Rejects missing, non-numeric and non-positive prices.
    pub fn into_quote(self) -> Result<SpotQuote, ProviderError> {
        let price = self
            .price
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .ok_or(ProviderError::MissingPrice)?;

        if !(price.is_finite() && price > 0.0) {
            return Err(ProviderError::NonPositivePrice(price));
        }

        Ok(SpotQuote {
            price_per_ounce: price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<SpotQuote, ProviderError> {
        serde_json::from_str::<SpotEnvelope>(body)
            .unwrap()
            .into_quote()
    }

    #[test]
    fn reads_price_and_ignores_extras() {
        let q = parse(
            r#"{"timestamp":1700000000,"metal":"XAU","currency":"EGP","price":3100.0,"ch":-3.2}"#,
        )
        .unwrap();
        assert_eq!(q.price_per_ounce, 3100.0);
    }

    #[test]
    fn integer_price_is_accepted() {
        assert_eq!(parse(r#"{"price":3100}"#).unwrap().price_per_ounce, 3100.0);
    }

    #[test]
    fn missing_or_null_price_is_rejected() {
        assert!(matches!(parse("{}"), Err(ProviderError::MissingPrice)));
        assert!(matches!(parse(r#"{"price":null}"#), Err(ProviderError::MissingPrice)));
        assert!(matches!(parse(r#"{"price":"3100"}"#), Err(ProviderError::MissingPrice)));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert!(matches!(
            parse(r#"{"price":0}"#),
            Err(ProviderError::NonPositivePrice(p)) if p == 0.0
        ));
        assert!(matches!(
            parse(r#"{"price":-5.5}"#),
            Err(ProviderError::NonPositivePrice(_))
        ));
    }
}
