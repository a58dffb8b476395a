//! The session manager.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use buildflow_domain::{Credentials, SessionState, UserProfile};

use crate::error::ApplicationResult;
use crate::ports::{ApiError, AuthGateway, Navigator, Route, TokenStorage};
use crate::session::{SessionHandle, SessionTeardown};

/// Single source of truth for "is there a valid session, and who is the
/// caller".
///
/// Owns the resolve/login/logout transitions over the shared
/// [`SessionHandle`]. The stored token is only ever created here (on login);
/// the gateway reads it and both this manager and the gateway's denied
/// recovery clear it through the one shared [`SessionTeardown`].
pub struct SessionManager<S, G, N> {
    storage: Arc<S>,
    gateway: Arc<G>,
    navigator: Arc<N>,
    teardown: Arc<SessionTeardown<S, N>>,
    session: SessionHandle,
    /// Serializes resolution passes.
    resolve_gate: Mutex<()>,
    /// Bumped after every completed resolution so callers that waited
    /// behind an in-flight pass reuse its result instead of re-probing.
    resolve_generation: AtomicU64,
}

impl<S, G, N> SessionManager<S, G, N>
where
    S: TokenStorage,
    G: AuthGateway,
    N: Navigator,
{
    /// Wires the manager over its collaborators.
    ///
    /// The teardown must be the same instance the gateway's denied recovery
    /// uses, and the handle the same one the teardown resets.
    pub fn new(
        storage: Arc<S>,
        gateway: Arc<G>,
        navigator: Arc<N>,
        teardown: Arc<SessionTeardown<S, N>>,
        session: SessionHandle,
    ) -> Self {
        Self {
            storage,
            gateway,
            navigator,
            teardown,
            session,
            resolve_gate: Mutex::new(()),
            resolve_generation: AtomicU64::new(0),
        }
    }

    /// The current session state.
    pub async fn state(&self) -> SessionState {
        self.session.get().await
    }

    /// A handle to the shared session state, for rendering layers.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Determines whether a stored token still backs a live session.
    ///
    /// No stored token resolves to `Unauthenticated` without touching the
    /// network. Otherwise a liveness probe runs: an explicit denial clears
    /// the token; any other probe failure is tolerated and the session is
    /// kept. Only the server saying "denied" invalidates a session;
    /// degraded connectivity never does.
    ///
    /// Overlapping calls collapse into a single in-flight probe: callers
    /// that waited behind one return its result directly.
    pub async fn resolve(&self) -> SessionState {
        let observed = self.resolve_generation.load(Ordering::SeqCst);
        let _gate = self.resolve_gate.lock().await;
        if self.resolve_generation.load(Ordering::SeqCst) != observed {
            // A resolution finished while we waited for the gate.
            return self.session.get().await;
        }
        self.resolve_locked().await
    }

    /// Performs the credential exchange and establishes the session.
    ///
    /// On success the returned token is persisted, a resolution pass runs
    /// against it and the caller is sent to the dashboard. On failure the
    /// error is surfaced unchanged and nothing is persisted.
    ///
    /// # Errors
    ///
    /// The gateway error from the credential exchange, or a storage error
    /// if the token cannot be persisted.
    pub async fn login(&self, credentials: &Credentials) -> ApplicationResult<SessionState> {
        let _gate = self.resolve_gate.lock().await;
        self.session.set(SessionState::Unknown).await;

        let token = match self.gateway.login(credentials).await {
            Ok(token) => token,
            Err(error) => {
                self.session.set(SessionState::Unauthenticated).await;
                return Err(error.into());
            }
        };
        tracing::info!(token = %token.preview(), "login accepted, establishing session");

        if let Err(error) = self.storage.store(&token).await {
            self.session.set(SessionState::Unauthenticated).await;
            return Err(error.into());
        }

        let state = self.resolve_locked().await;
        if state.is_authenticated() {
            self.navigator.go_to(Route::Dashboard).await;
        }
        Ok(state)
    }

    /// Tears the session down unconditionally.
    ///
    /// Side-effect-only and idempotent: the token is cleared, the state
    /// reset and the caller sent to the login entry point (unless already
    /// there).
    pub async fn logout(&self) {
        self.teardown.run().await;
    }

    /// The resolution pass proper. Callers must hold `resolve_gate`.
    async fn resolve_locked(&self) -> SessionState {
        let token = match self.storage.load().await {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "could not read stored token, treating as absent");
                None
            }
        };

        let next = match token {
            None => SessionState::Unauthenticated,
            Some(_) => match self.gateway.check_session().await {
                Ok(()) => SessionState::Authenticated {
                    user: UserProfile::placeholder(),
                },
                Err(ApiError::AuthenticationDenied) => {
                    // The gateway's own recovery normally ran already;
                    // running the shared teardown again is a no-op.
                    self.teardown.run().await;
                    SessionState::Unauthenticated
                }
                Err(error) => {
                    tracing::warn!(%error, "liveness probe failed, keeping session");
                    SessionState::Authenticated {
                        user: UserProfile::placeholder(),
                    }
                }
            },
        };

        self.session.set(next.clone()).await;
        self.resolve_generation.fetch_add(1, Ordering::SeqCst);
        next
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::RwLock;

    use buildflow_domain::AuthToken;

    use crate::auth::InMemoryTokenStorage;

    use super::*;

    /// What the stub gateway answers to a liveness probe.
    #[derive(Debug, Clone, Copy)]
    enum ProbeOutcome {
        Live,
        Denied,
        Offline,
    }

    struct StubGateway {
        probe_outcome: ProbeOutcome,
        probe_delay: Option<Duration>,
        probes: AtomicUsize,
        login_outcome: Result<AuthToken, ApiError>,
    }

    impl StubGateway {
        fn probing(outcome: ProbeOutcome) -> Self {
            Self {
                probe_outcome: outcome,
                probe_delay: None,
                probes: AtomicUsize::new(0),
                login_outcome: Ok(AuthToken::new("issued-token")),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.probe_delay = Some(delay);
            self
        }

        fn with_login(mut self, outcome: Result<AuthToken, ApiError>) -> Self {
            self.login_outcome = outcome;
            self
        }

        fn probe_count(&self) -> usize {
            self.probes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthGateway for StubGateway {
        async fn login(&self, _credentials: &Credentials) -> Result<AuthToken, ApiError> {
            self.login_outcome.clone()
        }

        async fn check_session(&self) -> Result<(), ApiError> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.probe_delay {
                tokio::time::sleep(delay).await;
            }
            match self.probe_outcome {
                ProbeOutcome::Live => Ok(()),
                ProbeOutcome::Denied => Err(ApiError::AuthenticationDenied),
                ProbeOutcome::Offline => {
                    Err(ApiError::ConnectionFailed("connection refused".to_string()))
                }
            }
        }
    }

    #[derive(Debug)]
    struct RecordingNavigator {
        current: RwLock<Route>,
        visits: std::sync::Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        fn on(route: Route) -> Self {
            Self {
                current: RwLock::new(route),
                visits: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn visits(&self) -> Vec<Route> {
            self.visits.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Navigator for RecordingNavigator {
        async fn current(&self) -> Route {
            *self.current.read().await
        }

        async fn go_to(&self, route: Route) {
            *self.current.write().await = route;
            self.visits.lock().unwrap().push(route);
        }
    }

    type StubManager = SessionManager<InMemoryTokenStorage, StubGateway, RecordingNavigator>;

    fn wire(
        storage: InMemoryTokenStorage,
        gateway: StubGateway,
        navigator: RecordingNavigator,
    ) -> (StubManager, Arc<StubGateway>, Arc<RecordingNavigator>) {
        let storage = Arc::new(storage);
        let gateway = Arc::new(gateway);
        let navigator = Arc::new(navigator);
        let session = SessionHandle::new();
        let teardown = Arc::new(SessionTeardown::new(
            Arc::clone(&storage),
            Arc::clone(&navigator),
            session.clone(),
        ));
        let manager = SessionManager::new(
            storage,
            Arc::clone(&gateway),
            Arc::clone(&navigator),
            teardown,
            session,
        );
        (manager, gateway, navigator)
    }

    #[tokio::test]
    async fn resolve_without_token_skips_the_probe() {
        let (manager, gateway, _) = wire(
            InMemoryTokenStorage::new(),
            StubGateway::probing(ProbeOutcome::Live),
            RecordingNavigator::on(Route::Login),
        );

        let state = manager.resolve().await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(gateway.probe_count(), 0);
    }

    #[tokio::test]
    async fn resolve_with_live_token_authenticates() {
        let (manager, gateway, _) = wire(
            InMemoryTokenStorage::with_token(AuthToken::new("stored")),
            StubGateway::probing(ProbeOutcome::Live),
            RecordingNavigator::on(Route::Dashboard),
        );

        let state = manager.resolve().await;

        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&UserProfile::placeholder()));
        assert_eq!(gateway.probe_count(), 1);
    }

    #[tokio::test]
    async fn denied_probe_clears_token_and_redirects() {
        let storage = InMemoryTokenStorage::with_token(AuthToken::new("stale"));
        let (manager, _, navigator) = wire(
            storage.clone(),
            StubGateway::probing(ProbeOutcome::Denied),
            RecordingNavigator::on(Route::Dashboard),
        );

        let state = manager.resolve().await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(storage.load().await.unwrap(), None);
        assert_eq!(navigator.visits(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn offline_probe_keeps_the_session() {
        let storage = InMemoryTokenStorage::with_token(AuthToken::new("stored"));
        let (manager, _, navigator) = wire(
            storage.clone(),
            StubGateway::probing(ProbeOutcome::Offline),
            RecordingNavigator::on(Route::Dashboard),
        );

        let state = manager.resolve().await;

        assert!(state.is_authenticated());
        assert_eq!(
            storage.load().await.unwrap().map(AuthToken::into_inner),
            Some("stored".to_string())
        );
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn concurrent_resolves_collapse_into_one_probe() {
        let (manager, gateway, _) = wire(
            InMemoryTokenStorage::with_token(AuthToken::new("stored")),
            StubGateway::probing(ProbeOutcome::Live).with_delay(Duration::from_millis(50)),
            RecordingNavigator::on(Route::Dashboard),
        );
        let manager = Arc::new(manager);

        let first = tokio::spawn({
            let manager = Arc::clone(&manager);
            async move { manager.resolve().await }
        });
        let second = tokio::spawn({
            let manager = Arc::clone(&manager);
            async move { manager.resolve().await }
        });

        let (first, second) = (first.await.unwrap(), second.await.unwrap());

        assert!(first.is_authenticated());
        assert_eq!(first, second);
        assert_eq!(gateway.probe_count(), 1);
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_lands_on_dashboard() {
        let storage = InMemoryTokenStorage::new();
        let (manager, _, navigator) = wire(
            storage.clone(),
            StubGateway::probing(ProbeOutcome::Live),
            RecordingNavigator::on(Route::Login),
        );

        let state = manager
            .login(&Credentials::new("admin", "admin123"))
            .await
            .unwrap();

        assert!(state.is_authenticated());
        assert_eq!(
            storage.load().await.unwrap().map(AuthToken::into_inner),
            Some("issued-token".to_string())
        );
        assert_eq!(navigator.visits(), vec![Route::Dashboard]);
    }

    #[tokio::test]
    async fn failed_login_surfaces_the_error_unchanged() {
        let storage = InMemoryTokenStorage::new();
        let (manager, _, navigator) = wire(
            storage.clone(),
            StubGateway::probing(ProbeOutcome::Live).with_login(Err(ApiError::Status {
                status: 400,
                message: Some("Credenciales incorrectas".to_string()),
            })),
            RecordingNavigator::on(Route::Login),
        );

        let error = manager
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            error.as_api().and_then(ApiError::server_message),
            Some("Credenciales incorrectas")
        );
        assert_eq!(storage.load().await.unwrap(), None);
        assert_eq!(manager.state().await, SessionState::Unauthenticated);
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let storage = InMemoryTokenStorage::with_token(AuthToken::new("stored"));
        let (manager, _, navigator) = wire(
            storage.clone(),
            StubGateway::probing(ProbeOutcome::Live),
            RecordingNavigator::on(Route::Dashboard),
        );

        manager.logout().await;
        manager.logout().await;

        assert_eq!(storage.load().await.unwrap(), None);
        assert_eq!(manager.state().await, SessionState::Unauthenticated);
        assert_eq!(navigator.visits(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn resolve_after_logout_stays_unauthenticated() {
        let (manager, gateway, _) = wire(
            InMemoryTokenStorage::with_token(AuthToken::new("stored")),
            StubGateway::probing(ProbeOutcome::Live),
            RecordingNavigator::on(Route::Dashboard),
        );

        manager.logout().await;
        let state = manager.resolve().await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(gateway.probe_count(), 0);
    }
}
