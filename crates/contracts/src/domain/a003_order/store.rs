use chrono::Utc;

use super::{Order, OrderDraft, OrderId};
use crate::domain::common::LineItem;
use crate::enums::OrderStatus;

/// Every order ever placed, newest first.
///
/// The frontend keeps this synced to localStorage; the store itself is pure
/// state so the ordering and lookup rules are testable on their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a rehydrated order list (already newest first as
    /// persisted).
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Turn a checkout draft into a placed order.
    ///
    /// Assigns a fresh id and creation time, defaults the status to
    /// `Pending` and prepends — the history view relies on newest-first.
    pub fn add_order(&mut self, draft: OrderDraft) -> OrderId {
        let order = Order {
            id: OrderId::new(),
            items: draft.items,
            total: draft.total,
            created_at: Some(Utc::now()),
            status: OrderStatus::Pending,
            payment_method: draft.payment_method,
            delivery_time_slot: draft.delivery_time_slot,
            customer_name: draft.customer_name,
            delivery_address: draft.delivery_address,
            contact_number: draft.contact_number,
            special_instructions: draft.special_instructions,
        };
        let id = order.id.clone();
        self.orders.insert(0, order);
        id
    }

    /// Lookup by id; a missing id is an empty result, never an error.
    pub fn get_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// A copy of an order's items, for repopulating the cart. Empty when
    /// the id matches nothing; the stored order is never touched.
    pub fn reorder_items(&self, id: &OrderId) -> Vec<LineItem> {
        self.get_by_id(id)
            .map(|o| o.items.clone())
            .unwrap_or_default()
    }

    pub fn clear_all(&mut self) {
        self.orders.clear();
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{PaymentMethod, QuantityType};

    fn draft(name: &str) -> OrderDraft {
        OrderDraft {
            items: vec![LineItem {
                product_id: "1".into(),
                name: "Small Eggs".into(),
                unit_price: 199.99,
                quantity: 2,
                size: "Small".into(),
                category: "Regular".into(),
                description: String::new(),
                quantity_type: QuantityType::HalfDozen,
            }],
            total: 399.98,
            payment_method: PaymentMethod::GCash,
            delivery_time_slot: "8:00 AM - 12:00 PM".into(),
            customer_name: name.into(),
            delivery_address: "Barangay Vito, Minglanilla".into(),
            contact_number: "0917 555 0101".into(),
            special_instructions: String::new(),
        }
    }

    #[test]
    fn test_add_order_prepends() {
        let mut store = OrderStore::new();
        store.add_order(draft("A"));
        store.add_order(draft("B"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.orders()[0].customer_name, "B");
        assert_eq!(store.orders()[1].customer_name, "A");
    }

    #[test]
    fn test_add_order_assigns_defaults() {
        let mut store = OrderStore::new();
        let id = store.add_order(draft("A"));

        let order = store.get_by_id(&id).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.created_at.is_some());
        assert!(!order.id.value().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = OrderStore::new();
        let first = store.add_order(draft("A"));
        let second = store.add_order(draft("B"));

        assert_ne!(first, second);
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let store = OrderStore::new();
        assert!(store.get_by_id(&OrderId("nope".into())).is_none());
    }

    #[test]
    fn test_reorder_items_returns_a_copy() {
        let mut store = OrderStore::new();
        let id = store.add_order(draft("A"));

        let mut items = store.reorder_items(&id);
        assert_eq!(items.len(), 1);

        items[0].quantity = 99;
        items.clear();

        let order = store.get_by_id(&id).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_reorder_items_missing_is_empty() {
        let store = OrderStore::new();
        assert!(store.reorder_items(&OrderId("nope".into())).is_empty());
    }

    #[test]
    fn test_clear_all_empties_the_store() {
        let mut store = OrderStore::new();
        store.add_order(draft("A"));
        store.clear_all();

        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_round_trip_via_json() {
        let mut store = OrderStore::new();
        store.add_order(draft("A"));
        store.add_order(draft("B"));

        let raw = serde_json::to_string(store.orders()).unwrap();
        let reloaded = OrderStore::from_orders(serde_json::from_str(&raw).unwrap());

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.orders()[0].customer_name, "B");
        assert_eq!(reloaded.orders()[0].items[0].quantity_type, QuantityType::HalfDozen);
    }
}
