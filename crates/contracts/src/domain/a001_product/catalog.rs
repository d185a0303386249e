use once_cell::sync::Lazy;

use super::Product;

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            "1",
            "Small Eggs",
            199.99,
            "Small",
            "Regular",
            "Fresh small eggs from our free-range chickens",
        ),
        Product::new(
            "2",
            "Medium Eggs",
            249.99,
            "Medium",
            "Regular",
            "Fresh medium eggs from our free-range chickens",
        ),
        Product::new(
            "3",
            "Large Eggs",
            299.99,
            "Large",
            "Regular",
            "Fresh large eggs from our free-range chickens",
        ),
        Product::new(
            "4",
            "Organic Eggs",
            349.99,
            "Large",
            "Organic",
            "Organic eggs from our free-range chickens",
        ),
    ]
});

/// The products shown on the storefront. Static for now; there is no
/// inventory behind the shop.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_ids() {
        let mut ids: Vec<_> = catalog().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }
}
