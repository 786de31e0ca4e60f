//! HTTP adapters for the personalization service.

pub mod personalization_client;
mod wire;

pub use personalization_client::PersonalizationClient;
