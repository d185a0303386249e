use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::common::{line_items_or_empty, LineItem};
use crate::enums::{OrderStatus, PaymentMethod};
use crate::shared::lenient;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque order identifier. Generated once at creation; uniqueness matters,
/// recency ordering does not (the store keeps orders newest-first itself).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Last six characters, the "Order #xxxxxx" display form.
    pub fn short(&self) -> &str {
        self.0
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| &self.0[i..])
            .unwrap_or(&self.0)
    }
}

// Previously saved blobs carry whatever was written there, including the
// plain numeric ids an earlier version generated. Accept any scalar.
impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer) {
            Ok(Value::String(s)) => OrderId(s),
            Ok(Value::Number(n)) => OrderId(n.to_string()),
            _ => OrderId::default(),
        })
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A placed order: a snapshot of the cart plus delivery details.
///
/// Field by field lenient on load — a corrupt scalar defaults instead of
/// dropping the record, so a damaged localStorage blob stays viewable in the
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: OrderId,

    #[serde(default, deserialize_with = "line_items_or_empty")]
    pub items: Vec<LineItem>,

    /// Σ unit price × quantity over `items`, excluding the delivery fee.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total: f64,

    #[serde(
        rename = "orderDate",
        default,
        deserialize_with = "lenient::datetime_or_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::order_status_or_default")]
    pub status: OrderStatus,

    #[serde(
        rename = "paymentMethod",
        default,
        deserialize_with = "lenient::payment_method_or_default"
    )]
    pub payment_method: PaymentMethod,

    #[serde(
        rename = "deliveryTimeSlot",
        default = "lenient::na",
        deserialize_with = "lenient::string_or_na"
    )]
    pub delivery_time_slot: String,

    #[serde(
        rename = "customerName",
        default = "lenient::na",
        deserialize_with = "lenient::string_or_na"
    )]
    pub customer_name: String,

    #[serde(
        rename = "deliveryAddress",
        default = "lenient::na",
        deserialize_with = "lenient::string_or_na"
    )]
    pub delivery_address: String,

    #[serde(
        rename = "contactNumber",
        default = "lenient::na",
        deserialize_with = "lenient::string_or_na"
    )]
    pub contact_number: String,

    #[serde(
        rename = "specialInstructions",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub special_instructions: String,
}

impl Order {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Draft
// ============================================================================

/// What the checkout form hands to the store. Id, creation time and status
/// are assigned by the store, never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub items: Vec<LineItem>,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub delivery_time_slot: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub contact_number: String,
    pub special_instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::QuantityType;

    fn order_json() -> &'static str {
        r#"{
            "id": "1733380000000",
            "items": [
                {"id": "1", "name": "Small Eggs", "price": 199.99, "quantity": 1,
                 "size": "Small", "type": "Regular", "description": "", "quantityType": "individual"}
            ],
            "total": 199.99,
            "orderDate": "2025-12-05T06:26:40Z",
            "status": "delivered",
            "paymentMethod": "paymaya",
            "deliveryTimeSlot": "1:00 PM - 5:00 PM",
            "customerName": "Ana Reyes",
            "deliveryAddress": "Barangay Vito, Minglanilla",
            "contactNumber": "0917 555 0101"
        }"#
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let order: Order = serde_json::from_str(order_json()).unwrap();
        assert_eq!(order.id.value(), "1733380000000");
        assert_eq!(order.id.short(), "000000");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.payment_method, PaymentMethod::PayMaya);
        assert!(order.created_at.is_some());
        assert_eq!(order.special_instructions, "");

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["orderDate"], "2025-12-05T06:26:40Z");
        assert_eq!(value["paymentMethod"], "paymaya");
        assert_eq!(value["customerName"], "Ana Reyes");
    }

    #[test]
    fn test_corrupt_total_defaults_to_zero_and_keeps_the_rest() {
        let json = order_json().replace("199.99,\n            \"orderDate\"", "\"abc\",\n            \"orderDate\"");
        let order: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.total, 0.0);
        assert_eq!(order.customer_name, "Ana Reyes");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity_type, QuantityType::Individual);
    }

    #[test]
    fn test_unparsable_date_becomes_none() {
        let json = order_json().replace("2025-12-05T06:26:40Z", "last tuesday");
        let order: Order = serde_json::from_str(&json).unwrap();
        assert!(order.created_at.is_none());
        assert_eq!(order.total, 199.99);
    }

    #[test]
    fn test_missing_fields_default_for_display() {
        let order: Order = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(order.customer_name, "N/A");
        assert_eq!(order.delivery_time_slot, "N/A");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::GCash);
        assert!(order.items.is_empty());
        assert!(order.created_at.is_none());
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let order: Order = serde_json::from_str(
            r#"{"id": "x", "status": "teleported", "paymentMethod": "doubloons"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::GCash);
    }

    #[test]
    fn test_short_id_handles_short_values() {
        assert_eq!(OrderId("42".into()).short(), "42");
        assert_eq!(OrderId("abcdefgh".into()).short(), "cdefgh");
    }
}
