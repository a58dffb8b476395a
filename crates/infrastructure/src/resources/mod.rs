//! Typed resource clients for the dashboard collections.
//!
//! Thin CRUD wrappers over the gateway. Records pass through untouched;
//! nothing here inspects status codes or tokens, that is the interceptor
//! pair's job.

mod expenses;
mod phases;
mod projects;
mod suppliers;
mod users;

pub use expenses::Expenses;
pub use phases::{Phases, Subphases};
pub use projects::Projects;
pub use suppliers::Suppliers;
pub use users::Users;
