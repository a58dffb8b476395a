//! Navigation port
//!
//! Forced redirects (to the login entry point on teardown, to the dashboard
//! after login) are side effects behind this trait. A UI shell plugs its
//! router in here.

use std::fmt;

use async_trait::async_trait;

/// The navigational contexts the session layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login entry point.
    Login,
    /// The authenticated landing page.
    Dashboard,
}

impl Route {
    /// The path this route renders at.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Port for observing and changing the current navigational context.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// The route currently displayed.
    async fn current(&self) -> Route;

    /// Navigates to the given route.
    async fn go_to(&self, route: Route);
}
