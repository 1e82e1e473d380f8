//! Shared request/response pieces

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Forms post numbers as text, JSON clients post them as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    fn as_text(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.trim().to_string(),
        }
    }
}

/// Lenient optional f64: numbers or numeric strings; anything unparsable is treated as missing
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_text().parse::<f64>().ok()))
}

/// Lenient optional Decimal, parsed from the textual form to keep cents exact
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let text = v.as_text();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Amounts {
        #[serde(default, deserialize_with = "optional_decimal")]
        amount: Option<Decimal>,
        #[serde(default, deserialize_with = "optional_f64")]
        lat: Option<f64>,
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let parsed: Amounts = serde_json::from_str(r#"{"amount": 10.25, "lat": "40.5"}"#).unwrap();
        assert_eq!(parsed.amount, Some(Decimal::new(1025, 2)));
        assert_eq!(parsed.lat, Some(40.5));

        let parsed: Amounts = serde_json::from_str(r#"{"amount": "7"}"#).unwrap();
        assert_eq!(parsed.amount, Some(Decimal::from(7)));
        assert_eq!(parsed.lat, None);
    }

    #[test]
    fn test_garbage_is_missing() {
        let parsed: Amounts = serde_json::from_str(r#"{"amount": "lots", "lat": null}"#).unwrap();
        assert_eq!(parsed.amount, None);
        assert_eq!(parsed.lat, None);
    }
}
