//! Catalog domain module.
//!
//! - `model`: the `Product` entity
//! - `price`: exact currency amounts
//! - `listing`: the ordered `Catalog`, search/filter and the fallback rule
//! - `builtin`: the storefront's static product list

mod builtin;
mod listing;
mod model;
mod price;

pub use builtin::builtin_products;
pub use listing::{ALL_CATEGORIES, Catalog, FALLBACK_SIZE};
pub use model::{Product, ProductId};
pub use price::{CURRENCY_SYMBOL, Price};
