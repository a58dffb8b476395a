//! BuildFlow Infrastructure - Adapters
//!
//! Implementations of the application-layer ports:
//! - The API gateway over reqwest, with its interceptor chain
//! - Typed resource clients for the dashboard collections
//! - File-backed token storage
//! - An in-memory navigation adapter
//! - Gateway configuration from the environment

pub mod config;
pub mod gateway;
pub mod navigation;
pub mod persistence;
pub mod resources;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::{ApiGateway, AuthRecovery, BearerAuth};
pub use navigation::InMemoryNavigator;
pub use persistence::FileTokenStorage;
pub use resources::{Expenses, Phases, Projects, Subphases, Suppliers, Users};
