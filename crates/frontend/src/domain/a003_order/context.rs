use contracts::domain::a003_order::{Order, OrderDraft, OrderId, OrderStore};
use contracts::domain::common::LineItem;
use leptos::prelude::*;

use crate::shared::storage;

const ORDERS_KEY: &str = "orders";

/// Reactive wrapper around the order store, synced to localStorage.
///
/// Every mutation persists immediately, in the order it happened; nothing
/// is batched. Until `hydrate` has run the store serves defaults and skips
/// writes so an early render cannot clobber the persisted list.
#[derive(Clone, Copy)]
pub struct OrderContext {
    store: RwSignal<OrderStore>,
    hydrated: RwSignal<bool>,
}

impl OrderContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(OrderStore::new()),
            hydrated: RwSignal::new(false),
        }
    }

    /// One-shot load from localStorage once the browser environment is up.
    /// A record with corrupt fields comes back with those fields defaulted
    /// rather than dropped; an unreadable blob yields an empty store.
    pub fn hydrate(&self) {
        if self.hydrated.get_untracked() {
            return;
        }

        if let Some(orders) = storage::load_json::<Vec<Order>>(ORDERS_KEY) {
            log::debug!("order store hydrated: {} orders", orders.len());
            self.store.set(OrderStore::from_orders(orders));
        }

        self.hydrated.set(true);
    }

    fn persist(&self) {
        if !self.hydrated.get_untracked() {
            return;
        }
        self.store
            .with_untracked(|s| storage::save_json(ORDERS_KEY, &s.orders()));
    }

    /// Place an order from a checkout draft and persist the new list.
    pub fn add_order(&self, draft: OrderDraft) -> OrderId {
        let mut created = OrderId::default();
        self.store.update(|s| created = s.add_order(draft));
        self.persist();
        created
    }

    pub fn get_by_id(&self, id: &OrderId) -> Option<Order> {
        self.store.with(|s| s.get_by_id(id).cloned())
    }

    /// A copy of an order's items for repopulating the cart.
    pub fn reorder_items(&self, id: &OrderId) -> Vec<LineItem> {
        self.store.with_untracked(|s| s.reorder_items(id))
    }

    /// Drop all orders and remove the persisted key entirely, leaving no
    /// empty-array remnant behind.
    pub fn clear_all(&self) {
        self.store.update(OrderStore::clear_all);
        if self.hydrated.get_untracked() {
            storage::remove(ORDERS_KEY);
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.store.with(|s| s.orders().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(OrderStore::is_empty)
    }
}

impl Default for OrderContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_orders() -> OrderContext {
    use_context::<OrderContext>().expect("OrderContext not found. Provide it from App.")
}
