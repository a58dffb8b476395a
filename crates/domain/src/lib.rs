//! BuildFlow Domain - Core business types
//!
//! This crate defines the domain model for the BuildFlow client: the
//! session/authentication value types and the dashboard records exchanged
//! with the remote API. All types here are pure Rust with no I/O
//! dependencies.

pub mod auth;
pub mod error;
pub mod expense;
pub mod phase;
pub mod project;
pub mod session;
pub mod supplier;
pub mod user;

pub use auth::{AuthToken, Credentials, Role, UserProfile};
pub use error::{DomainError, DomainResult};
pub use expense::{Expense, ExpenseType};
pub use phase::{Phase, Subphase, SubphaseStatus};
pub use project::{Project, ProjectStatus};
pub use session::SessionState;
pub use supplier::Supplier;
pub use user::UserAccount;
