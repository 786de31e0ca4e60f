//! Domain layer for CosmoCart.
//!
//! Holds the storefront's entities (products, cart, session token, viewed
//! history, recommendations), the traits the outer layers implement, and the
//! shared error type. Nothing in here performs I/O on its own.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod recommendation;
pub mod session;

// Re-export common error type
pub use error::{CosmoError, Result};
