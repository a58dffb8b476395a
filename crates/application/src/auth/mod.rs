//! Authentication support for the application layer.

mod token_store;

pub use token_store::InMemoryTokenStorage;
