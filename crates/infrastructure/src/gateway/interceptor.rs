//! The interceptor pair wrapped around every outbound call.

use std::sync::Arc;

use reqwest::{RequestBuilder, StatusCode, header};

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_application::session::SessionTeardown;

/// Request stage: attach the stored token as a bearer credential.
///
/// When no token is stored the request goes out unauthenticated; a storage
/// read failure degrades to the same (logged) rather than failing the call.
#[derive(Debug)]
pub struct BearerAuth<S> {
    storage: Arc<S>,
}

impl<S: TokenStorage> BearerAuth<S> {
    /// Creates the stage over the shared token store.
    pub const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Applies the stage to an outgoing request.
    pub async fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.storage.load().await {
            Ok(Some(token)) => builder.header(header::AUTHORIZATION, token.authorization_header()),
            Ok(None) => builder,
            Err(error) => {
                tracing::warn!(%error, "could not read stored token, sending unauthenticated");
                builder
            }
        }
    }
}

/// Response stage: detect authentication denials and tear the session down.
///
/// Runs for every response regardless of which page triggered the call.
/// Anything other than a 401 passes through untouched; transport failures
/// never reach this stage and never cause teardown.
#[derive(Debug)]
pub struct AuthRecovery<S, N> {
    teardown: Arc<SessionTeardown<S, N>>,
}

impl<S, N> AuthRecovery<S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    /// Creates the stage over the shared teardown operation.
    pub const fn new(teardown: Arc<SessionTeardown<S, N>>) -> Self {
        Self { teardown }
    }

    /// Inspects a response status, recovering from denials.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationDenied`] after tearing the session down
    /// when the server answered 401.
    pub async fn inspect(&self, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("authentication denied by the server, tearing session down");
            self.teardown.run().await;
            return Err(ApiError::AuthenticationDenied);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::RwLock;

    use buildflow_application::auth::InMemoryTokenStorage;
    use buildflow_application::ports::Route;
    use buildflow_application::session::SessionHandle;
    use buildflow_domain::AuthToken;

    use super::*;

    fn request() -> RequestBuilder {
        reqwest::Client::new().get("http://localhost:8080/api/proyectos")
    }

    #[tokio::test]
    async fn attaches_the_stored_token_exactly() {
        let storage = Arc::new(InMemoryTokenStorage::with_token(AuthToken::new("tok-123")));
        let stage = BearerAuth::new(storage);

        let built = stage.apply(request()).await.build().unwrap();

        let value = built.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
    }

    #[tokio::test]
    async fn sends_unauthenticated_without_a_token() {
        let stage = BearerAuth::new(Arc::new(InMemoryTokenStorage::new()));

        let built = stage.apply(request()).await.build().unwrap();

        assert!(built.headers().get(header::AUTHORIZATION).is_none());
    }

    #[derive(Debug)]
    struct TrackingNavigator {
        current: RwLock<Route>,
    }

    #[async_trait]
    impl Navigator for TrackingNavigator {
        async fn current(&self) -> Route {
            *self.current.read().await
        }

        async fn go_to(&self, route: Route) {
            *self.current.write().await = route;
        }
    }

    fn recovery_fixture() -> (
        Arc<InMemoryTokenStorage>,
        Arc<TrackingNavigator>,
        AuthRecovery<InMemoryTokenStorage, TrackingNavigator>,
    ) {
        let storage = Arc::new(InMemoryTokenStorage::with_token(AuthToken::new("tok")));
        let navigator = Arc::new(TrackingNavigator {
            current: RwLock::new(Route::Dashboard),
        });
        let teardown = Arc::new(SessionTeardown::new(
            Arc::clone(&storage),
            Arc::clone(&navigator),
            SessionHandle::new(),
        ));
        (storage, navigator, AuthRecovery::new(teardown))
    }

    #[tokio::test]
    async fn denial_clears_token_and_redirects() {
        let (storage, navigator, stage) = recovery_fixture();

        let outcome = stage.inspect(StatusCode::UNAUTHORIZED).await;

        assert_eq!(outcome, Err(ApiError::AuthenticationDenied));
        assert_eq!(storage.load().await.unwrap(), None);
        assert_eq!(navigator.current().await, Route::Login);
    }

    #[tokio::test]
    async fn other_statuses_pass_through_untouched() {
        let (storage, navigator, stage) = recovery_fixture();

        stage.inspect(StatusCode::OK).await.unwrap();
        stage.inspect(StatusCode::NOT_FOUND).await.unwrap();
        stage.inspect(StatusCode::INTERNAL_SERVER_ERROR).await.unwrap();

        assert!(storage.load().await.unwrap().is_some());
        assert_eq!(navigator.current().await, Route::Dashboard);
    }
}
