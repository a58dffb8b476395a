//! Shared session state handle.

use std::sync::Arc;

use tokio::sync::RwLock;

use buildflow_domain::SessionState;

/// Cloneable handle to the current session state.
///
/// All clones observe the same state. Reads are cheap clones of the state
/// value; writes are restricted to the session layer (the manager and the
/// teardown path) so pages render the state but never mutate it.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    /// Creates a handle in the initial `Unknown` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session state.
    pub async fn get(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub(crate) async fn set(&self, next: SessionState) {
        *self.state.write().await = next;
    }
}
