//! HTTP clients for the external collaborator services
//!
//! One client per service: place-name lookup, route paths and itinerary
//! text generation. Each client owns a `reqwest::Client` built with the
//! configured timeout; calls are single-shot, failures are reported to
//! the caller rather than retried.

pub mod generation;
pub mod geocoding;
pub mod routing;

pub use generation::TextGenerationClient;
pub use geocoding::GeocodingClient;
pub use routing::{RoutePath, RoutingClient};

use std::time::Duration;

use anyhow::{Context, Result};

/// User agent sent with every outgoing request
const USER_AGENT: &str = concat!("tripweaver/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client with the given request timeout
pub(crate) fn build_http_client(timeout_seconds: u32) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(u64::from(timeout_seconds)))
        .user_agent(USER_AGENT)
        .build()
        .with_context(|| "Failed to create HTTP client")
}
