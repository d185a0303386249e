pub mod a001_product;
pub mod a002_cart;
pub mod a003_order;
pub mod a004_customer;
pub mod common;
