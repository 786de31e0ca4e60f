//! Session domain module.
//!
//! - `model`: the opaque `SessionToken` and where it came from
//! - `repository`: persistence interface for the token
//! - `identity`: lazy get-or-create of the per-installation token

mod identity;
mod model;
mod repository;

pub use identity::{SESSION_TOKEN_LEN, SessionIdentity};
pub use model::{SessionOrigin, SessionToken};
pub use repository::SessionTokenRepository;
