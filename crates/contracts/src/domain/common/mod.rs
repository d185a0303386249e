//! Types shared between the cart and order aggregates

pub mod line_item;

pub use line_item::{line_items_or_empty, LineItem};
