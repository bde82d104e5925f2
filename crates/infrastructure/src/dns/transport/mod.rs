pub mod https;

use async_trait::async_trait;
use ferrous_doh_application::ports::{UpstreamRequest, UpstreamResponse};
use ferrous_doh_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

/// One HTTP exchange with one upstream endpoint.
///
/// Any HTTP status is an `Ok`; strategies decide what counts as success.
/// Network failures and deadline expiry are errors.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(
        &self,
        endpoint: &str,
        request: &UpstreamRequest,
        timeout: Duration,
    ) -> Result<UpstreamResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
