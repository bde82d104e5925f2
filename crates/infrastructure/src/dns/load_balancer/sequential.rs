use super::strategy::{non_success, transport_failure, QueryContext};
use ferrous_doh_application::ports::UpstreamResponse;
use ferrous_doh_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tries endpoints one at a time in a fresh random order per request.
pub struct SequentialStrategy;

impl SequentialStrategy {
    pub fn new() -> Self {
        Self
    }

    pub async fn query(&self, ctx: &QueryContext<'_>) -> Result<UpstreamResponse, DomainError> {
        let order = shuffled(ctx.endpoints);
        debug!(strategy = "sequential", endpoints = order.len(), "Trying sequentially");

        let mut attempts = Vec::with_capacity(order.len());

        for (position, endpoint) in order.iter().enumerate() {
            match ctx.transport.send(endpoint, ctx.request, ctx.timeout).await {
                Ok(response) if response.is_success() => {
                    debug!(server = %endpoint, position, "Server responded");
                    return Ok(response);
                }
                Ok(response) => {
                    debug!(server = %endpoint, status = response.status, position, "Non-200 response, trying next");
                    attempts.push(non_success(&response));
                }
                Err(e) => {
                    warn!(server = %endpoint, error = %e, position, "Failing over");
                    attempts.push(transport_failure(endpoint, &e));
                }
            }
        }

        Err(DomainError::AllUpstreamsFailed { attempts })
    }
}

impl Default for SequentialStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform shuffle without replacement: repeatedly take a random remaining
/// endpoint.
fn shuffled(endpoints: &[Arc<str>]) -> Vec<Arc<str>> {
    let mut remaining = endpoints.to_vec();
    let mut order = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let index = fastrand::usize(..remaining.len());
        order.push(remaining.swap_remove(index));
    }
    order
}
