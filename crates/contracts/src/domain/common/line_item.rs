use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::enums::QuantityType;
use crate::shared::lenient;

/// One cart or order entry: a product at a given quantity and quantity type.
///
/// JSON key names match the shape previously written to localStorage, so
/// older saved orders keep loading (`id`, `price`, `type`, `quantityType`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id", default, deserialize_with = "lenient::string_or_empty")]
    pub product_id: String,

    #[serde(default = "lenient::na", deserialize_with = "lenient::string_or_na")]
    pub name: String,

    #[serde(rename = "price", default, deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,

    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub quantity: u32,

    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub size: String,

    #[serde(rename = "type", default, deserialize_with = "lenient::string_or_empty")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub description: String,

    #[serde(
        rename = "quantityType",
        default,
        deserialize_with = "lenient::quantity_type_or_default"
    )]
    pub quantity_type: QuantityType,
}

impl LineItem {
    /// Price contribution of this line.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Physical egg count represented by this line.
    pub fn total_eggs(&self) -> u32 {
        self.quantity * self.quantity_type.eggs_per_unit()
    }

    /// Two entries merge inside a cart only when both parts match.
    pub fn merges_with(&self, product_id: &str, quantity_type: QuantityType) -> bool {
        self.product_id == product_id && self.quantity_type == quantity_type
    }
}

/// Items array of a persisted order: non-object elements are dropped, and
/// anything that is not an array at all becomes empty.
pub fn line_items_or_empty<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer) {
        Ok(Value::Array(values)) => values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json() -> &'static str {
        r#"{
            "id": "2",
            "name": "Medium Eggs",
            "price": 249.99,
            "quantity": 2,
            "size": "Medium",
            "type": "Regular",
            "description": "Fresh medium eggs from our free-range chickens",
            "quantityType": "half-dozen"
        }"#
    }

    #[test]
    fn test_round_trip_keeps_original_keys() {
        let item: LineItem = serde_json::from_str(item_json()).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["price"], 249.99);
        assert_eq!(value["type"], "Regular");
        assert_eq!(value["quantityType"], "half-dozen");
    }

    #[test]
    fn test_line_total_and_eggs() {
        let item: LineItem = serde_json::from_str(item_json()).unwrap();
        assert!((item.line_total() - 499.98).abs() < 1e-9);
        assert_eq!(item.total_eggs(), 12);
    }

    #[test]
    fn test_corrupt_scalars_default_without_dropping_the_item() {
        let item: LineItem = serde_json::from_str(
            r#"{"id":"3","name":null,"price":"abc","quantity":2,"quantityType":"dozen"}"#,
        )
        .unwrap();
        assert_eq!(item.product_id, "3");
        assert_eq!(item.name, "N/A");
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.quantity_type, QuantityType::Dozen);
    }

    #[test]
    fn test_legacy_tray_codes_stay_parseable() {
        let item: LineItem =
            serde_json::from_str(r#"{"id":"1","quantityType":"half-tray"}"#).unwrap();
        assert_eq!(item.quantity_type, QuantityType::HalfTray);
        assert_eq!(item.quantity_type.eggs_per_unit(), 15);
    }

    #[test]
    fn test_non_object_items_are_dropped() {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "line_items_or_empty")]
            items: Vec<LineItem>,
        }

        let p: Probe =
            serde_json::from_str(r#"{"items":[{"id":"1"},42,"junk",{"id":"2"}]}"#).unwrap();
        assert_eq!(p.items.len(), 2);
        assert_eq!(p.items[1].product_id, "2");

        let p: Probe = serde_json::from_str(r#"{"items":"oops"}"#).unwrap();
        assert!(p.items.is_empty());
    }
}
