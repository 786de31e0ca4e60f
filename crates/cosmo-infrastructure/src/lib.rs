//! File-backed implementations of the storefront's persistence traits.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod toml_session_token_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::{CosmoPaths, PathError};
pub use crate::toml_session_token_repository::TomlSessionTokenRepository;
