//! Persistence adapters.

mod token_file;

pub use token_file::FileTokenStorage;
