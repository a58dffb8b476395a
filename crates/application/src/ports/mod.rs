//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer (or by a mock in tests).

mod gateway;
mod navigator;
mod token_storage;

pub use gateway::{ApiError, AuthGateway};
pub use navigator::{Navigator, Route};
pub use token_storage::{StorageError, TokenStorage};
