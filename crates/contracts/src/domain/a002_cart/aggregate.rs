use crate::domain::a001_product::Product;
use crate::domain::common::LineItem;
use crate::enums::QuantityType;

/// The shopping cart: line items keyed by `(product id, quantity type)`.
///
/// Lives in memory only — carts are per browser session and never persisted.
/// Every operation is total; a key that matches nothing is a no-op, not an
/// error. Insertion order is preserved so the panel renders stably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product at the given quantity and quantity type.
    ///
    /// An entry with the same `(product id, quantity type)` has its quantity
    /// incremented; the same product at a different quantity type is a
    /// separate line.
    pub fn add(&mut self, product: &Product, quantity: u32, quantity_type: QuantityType) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.merges_with(&product.id, quantity_type))
        {
            existing.quantity += quantity;
            return;
        }

        self.items.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            size: product.size.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            quantity_type,
        });
    }

    /// Remove the matching line. Silently does nothing when absent.
    pub fn remove(&mut self, product_id: &str, quantity_type: QuantityType) {
        self.items
            .retain(|i| !i.merges_with(product_id, quantity_type));
    }

    /// Replace a line's quantity. Quantities below 1 are ignored — dropping
    /// a line takes an explicit `remove`.
    pub fn update_quantity(&mut self, product_id: &str, quantity_type: QuantityType, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.merges_with(product_id, quantity_type))
        {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole cart, used when reordering from the history.
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ unit price × quantity over all lines. The delivery fee is a
    /// display concern and never part of this.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Σ quantity over all lines (the cart badge number).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog;

    fn eggs(id: &str) -> &'static Product {
        catalog()
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("no product {id}"))
    }

    #[test]
    fn test_add_same_key_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual);
        cart.add(eggs("1"), 2, QuantityType::Individual);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_same_product_different_type_is_a_new_line() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual);
        cart.add(eggs("1"), 1, QuantityType::Dozen);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_replaces_in_place() {
        let mut cart = Cart::new();
        cart.add(eggs("2"), 1, QuantityType::HalfDozen);
        cart.update_quantity("2", QuantityType::HalfDozen, 5);

        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_below_one_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(eggs("2"), 2, QuantityType::HalfDozen);
        cart.update_quantity("2", QuantityType::HalfDozen, 0);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_for_missing_key_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual);
        cart.update_quantity("1", QuantityType::Dozen, 7);

        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_deletes_only_the_matching_line() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual);
        cart.add(eggs("1"), 1, QuantityType::Dozen);
        cart.remove("1", QuantityType::Individual);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity_type, QuantityType::Dozen);
    }

    #[test]
    fn test_remove_missing_key_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual);
        cart.remove("9", QuantityType::Individual);

        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_total_is_the_literal_sum() {
        let mut cart = Cart::new();
        cart.add(eggs("1"), 1, QuantityType::Individual); // 199.99
        cart.add(eggs("2"), 2, QuantityType::Individual); // 2 x 249.99

        assert!((cart.total() - 699.97).abs() < 1e-9);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut cart = Cart::new();
        cart.add(eggs("3"), 4, QuantityType::Dozen);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }
}
