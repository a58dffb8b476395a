//! The shared session teardown operation.

use std::sync::Arc;

use tokio::sync::Mutex;

use buildflow_domain::SessionState;

use crate::ports::{Navigator, Route, TokenStorage};
use crate::session::SessionHandle;

/// The single clear-and-redirect path out of an authenticated session.
///
/// Two writers reach it: an explicit `logout()` and the gateway's
/// authentication-denied recovery. Runs are serialized by an internal gate
/// and the redirect is skipped when the login route is already current, so
/// concurrent denials produce exactly one observable navigation.
///
/// Side-effect-only: storage failures are logged and swallowed, never
/// propagated. Repeated runs are no-ops.
#[derive(Debug)]
pub struct SessionTeardown<S, N> {
    storage: Arc<S>,
    navigator: Arc<N>,
    session: SessionHandle,
    gate: Mutex<()>,
}

impl<S, N> SessionTeardown<S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    /// Creates the teardown operation over the shared session resources.
    pub fn new(storage: Arc<S>, navigator: Arc<N>, session: SessionHandle) -> Self {
        Self {
            storage,
            navigator,
            session,
            gate: Mutex::new(()),
        }
    }

    /// Clears the stored token, resets the session state and redirects to
    /// the login entry point when not already there.
    pub async fn run(&self) {
        let _permit = self.gate.lock().await;

        if let Err(error) = self.storage.clear().await {
            tracing::warn!(%error, "failed to clear stored token during teardown");
        }
        self.session.set(SessionState::Unauthenticated).await;

        if self.navigator.current().await != Route::Login {
            self.navigator.go_to(Route::Login).await;
        }
    }
}
