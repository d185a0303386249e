use contracts::domain::a001_product::Product;
use contracts::domain::a002_cart::Cart;
use contracts::domain::common::LineItem;
use contracts::enums::QuantityType;
use leptos::prelude::*;

/// Reactive wrapper around the cart state machine.
///
/// Carts are per browser session and never persisted, so unlike the other
/// contexts there is no hydration here. `is_open` drives the dropdown
/// panel: adding to the cart opens it so the user sees what happened.
#[derive(Clone, Copy)]
pub struct CartContext {
    cart: RwSignal<Cart>,
    pub is_open: RwSignal<bool>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            is_open: RwSignal::new(false),
        }
    }

    pub fn add_item(&self, product: &Product, quantity: u32, quantity_type: QuantityType) {
        self.cart
            .update(|c| c.add(product, quantity, quantity_type));
        self.is_open.set(true);
    }

    pub fn remove_item(&self, product_id: &str, quantity_type: QuantityType) {
        self.cart.update(|c| c.remove(product_id, quantity_type));
    }

    pub fn update_quantity(&self, product_id: &str, quantity_type: QuantityType, quantity: u32) {
        self.cart
            .update(|c| c.update_quantity(product_id, quantity_type, quantity));
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
        self.is_open.set(false);
    }

    /// Replace the cart contents (reorder from the history) and show the
    /// panel.
    pub fn set_items(&self, items: Vec<LineItem>) {
        self.cart.update(|c| c.set_items(items));
        self.is_open.set(true);
    }

    pub fn toggle_open(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    pub fn items(&self) -> Vec<LineItem> {
        self.cart.with(|c| c.items().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    pub fn total(&self) -> f64 {
        self.cart.with(Cart::total)
    }

    pub fn item_count(&self) -> u32 {
        self.cart.with(Cart::item_count)
    }

    /// Snapshot for building an order draft, outside reactive tracking.
    pub fn items_untracked(&self) -> Vec<LineItem> {
        self.cart.with_untracked(|c| c.items().to_vec())
    }

    pub fn total_untracked(&self) -> f64 {
        self.cart.with_untracked(Cart::total)
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Provide it from App.")
}
