//! The API gateway: the single egress point for all calls to the remote
//! API.
//!
//! Every outbound request flows through an explicit interceptor pair: the
//! request stage attaches the stored bearer token and the response stage
//! recovers from authentication denials. Page-level code never handles
//! tokens or inspects status codes for this purpose.

mod client;
mod interceptor;

pub use client::ApiGateway;
pub use interceptor::{AuthRecovery, BearerAuth};
