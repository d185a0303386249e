//! Tolerant field deserializers for previously persisted JSON.
//!
//! Orders live in browser localStorage and survive app versions, manual
//! edits and partial writes. A record with a corrupt field is still worth
//! showing, so scalar fields degrade one by one instead of rejecting the
//! whole record: strings fall back to `""` (or `"N/A"` for display-critical
//! ones), numbers to `0`, dates to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::enums::{OrderStatus, PaymentMethod, QuantityType};

/// Serde `default` for display-critical string fields.
pub fn na() -> String {
    "N/A".to_string()
}

/// String field: wrong-typed values become the empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) => s,
        Ok(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// String field that is always rendered: wrong-typed or empty values become
/// `"N/A"` so the history view has something to show.
pub fn string_or_na<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) if !s.is_empty() => s,
        Ok(Value::Number(n)) => n.to_string(),
        _ => na(),
    })
}

/// Numeric field: anything that is not a number (or a numeric string)
/// becomes `0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Ok(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Quantity field: non-integer values become `0`.
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        Ok(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Date field: an unparsable date is `None`, which the UI renders as
/// "No date".
pub fn datetime_or_none<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
        _ => None,
    })
}

/// Quantity-type field: unknown or wrong-typed codes fall back to
/// `Individual`.
pub fn quantity_type_or_default<'de, D>(deserializer: D) -> Result<QuantityType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) => QuantityType::from_code(&s),
        _ => QuantityType::default(),
    })
}

/// Payment-method field: unknown codes fall back to the first checkout
/// option.
pub fn payment_method_or_default<'de, D>(deserializer: D) -> Result<PaymentMethod, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) => PaymentMethod::from_code(&s),
        _ => PaymentMethod::default(),
    })
}

/// Status field: unknown codes fall back to `Pending`.
pub fn order_status_or_default<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::String(s)) => OrderStatus::from_code(&s),
        _ => OrderStatus::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_empty")]
        text: String,
        #[serde(default = "na", deserialize_with = "string_or_na")]
        label: String,
        #[serde(default, deserialize_with = "f64_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "u32_or_zero")]
        count: u32,
        #[serde(default, deserialize_with = "datetime_or_none")]
        when: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_well_formed_fields_pass_through() {
        let p: Probe = serde_json::from_str(
            r#"{"text":"hi","label":"eggs","amount":249.99,"count":3,"when":"2025-12-05T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(p.text, "hi");
        assert_eq!(p.label, "eggs");
        assert_eq!(p.amount, 249.99);
        assert_eq!(p.count, 3);
        assert!(p.when.is_some());
    }

    #[test]
    fn test_wrong_typed_fields_degrade() {
        let p: Probe = serde_json::from_str(
            r#"{"text":{},"label":null,"amount":"abc","count":-2,"when":"not a date"}"#,
        )
        .unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.label, "N/A");
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.count, 0);
        assert!(p.when.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.label, "N/A");
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.count, 0);
        assert!(p.when.is_none());
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let p: Probe = serde_json::from_str(r#"{"amount":"199.99","count":"4"}"#).unwrap();
        assert_eq!(p.amount, 199.99);
        assert_eq!(p.count, 4);
    }
}
