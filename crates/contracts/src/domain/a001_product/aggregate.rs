use serde::{Deserialize, Serialize};

/// A product the storefront offers.
///
/// The unit price is per single quantity unit regardless of quantity type;
/// the card shows what one unit means in eggs next to the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub size: String,
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        size: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            size: size.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}
