//! Entity generators for seed data.
//!
//! - [`ProductGenerator`]: Generate catalog products with prices, discounts and timestamps

pub mod commerce;
pub mod product;

pub use product::{GeneratedProduct, ProductGenConfig, ProductGenerator, discounted_price};
