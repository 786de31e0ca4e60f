pub mod cart;
pub mod catalog;
pub mod config;
pub mod session;
pub mod shop;
