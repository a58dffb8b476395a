//! BuildFlow client - binary entry point
//!
//! Wires the session stack explicitly (state handle, teardown, gateway,
//! manager), runs the startup resolution pass and reports the resulting
//! session state.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use buildflow_application::session::{SessionHandle, SessionManager, SessionTeardown};
use buildflow_infrastructure::{ApiGateway, FileTokenStorage, GatewayConfig, InMemoryNavigator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        base_url = %config.base_url(),
        "starting BuildFlow client v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Explicit session lifecycle: handle -> teardown -> gateway -> manager.
    let storage = Arc::new(FileTokenStorage::default_location()?);
    let navigator = Arc::new(InMemoryNavigator::new());
    let session = SessionHandle::new();
    let teardown = Arc::new(SessionTeardown::new(
        Arc::clone(&storage),
        Arc::clone(&navigator),
        session.clone(),
    ));
    let gateway = Arc::new(ApiGateway::new(
        &config,
        Arc::clone(&storage),
        Arc::clone(&teardown),
    )?);
    let manager = SessionManager::new(storage, gateway, navigator, teardown, session);

    let state = manager.resolve().await;
    match state.user() {
        Some(user) => {
            tracing::info!(username = %user.username, role = %user.role, "session restored");
        }
        None => tracing::info!("no active session, login required"),
    }

    Ok(())
}
