//! Session lifecycle
//!
//! This module provides:
//! - A cloneable handle to the shared session state
//! - The shared teardown operation (the single clear-and-redirect path)
//! - The session manager driving resolve/login/logout

mod manager;
mod state;
mod teardown;

pub use manager::SessionManager;
pub use state::SessionHandle;
pub use teardown::SessionTeardown;
