//! Authentication domain types

mod types;

pub use types::{AuthToken, Credentials, Role, UserProfile};
