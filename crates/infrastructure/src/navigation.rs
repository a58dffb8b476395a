//! In-memory navigation adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use buildflow_application::ports::{Navigator, Route};

/// Tracks the current route in memory and logs transitions.
///
/// Stands in for a real router in the binary shell and in tests; a UI
/// embeds its own [`Navigator`] implementation instead.
#[derive(Debug)]
pub struct InMemoryNavigator {
    current: RwLock<Route>,
}

impl InMemoryNavigator {
    /// Creates a navigator positioned on the login entry point.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Route::Login)
    }

    /// Creates a navigator positioned on the given route.
    #[must_use]
    pub const fn starting_at(route: Route) -> Self {
        Self {
            current: RwLock::const_new(route),
        }
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for InMemoryNavigator {
    async fn current(&self) -> Route {
        *self.current.read().await
    }

    async fn go_to(&self, route: Route) {
        let mut current = self.current.write().await;
        if *current != route {
            tracing::info!(from = %*current, to = %route, "navigating");
            *current = route;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn tracks_route_changes() {
        let navigator = InMemoryNavigator::new();
        assert_eq!(navigator.current().await, Route::Login);

        navigator.go_to(Route::Dashboard).await;
        assert_eq!(navigator.current().await, Route::Dashboard);

        // Re-navigating to the current route is a no-op.
        navigator.go_to(Route::Dashboard).await;
        assert_eq!(navigator.current().await, Route::Dashboard);
    }
}
