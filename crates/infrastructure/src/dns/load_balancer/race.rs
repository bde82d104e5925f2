use super::strategy::{non_success, transport_failure, QueryContext};
use ferrous_doh_application::ports::UpstreamResponse;
use ferrous_doh_domain::{DomainError, UpstreamFailure};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Queries every endpoint at once; the first HTTP 200 wins and the rest are
/// aborted.
pub struct RaceStrategy;

impl RaceStrategy {
    pub fn new() -> Self {
        Self
    }

    pub async fn query(&self, ctx: &QueryContext<'_>) -> Result<UpstreamResponse, DomainError> {
        if ctx.endpoints.is_empty() {
            return Err(DomainError::AllUpstreamsFailed { attempts: vec![] });
        }

        debug!(strategy = "race", endpoints = ctx.endpoints.len(), "Racing all upstreams");

        let mut abort_handles = Vec::with_capacity(ctx.endpoints.len());
        let mut futs = FuturesUnordered::new();

        for endpoint in ctx.endpoints {
            let transport = Arc::clone(ctx.transport);
            let endpoint = Arc::clone(endpoint);
            let request = ctx.request.clone();
            let timeout = ctx.timeout;
            let handle = tokio::spawn(async move {
                let result = transport.send(&endpoint, &request, timeout).await;
                (endpoint, result)
            });
            abort_handles.push(handle.abort_handle());
            futs.push(handle);
        }

        let mut attempts = Vec::with_capacity(ctx.endpoints.len());
        let mut winner = None;

        while let Some(join_result) = futs.next().await {
            match join_result {
                Ok((_, Ok(response))) if response.is_success() => {
                    debug!(server = %response.upstream, "Fastest response");
                    winner = Some(response);
                    break;
                }
                Ok((_, Ok(response))) => {
                    debug!(server = %response.upstream, status = response.status, "Non-200 response");
                    attempts.push(non_success(&response));
                }
                Ok((endpoint, Err(e))) => {
                    debug!(server = %endpoint, error = %e, "Server failed");
                    attempts.push(transport_failure(&endpoint, &e));
                }
                Err(e) => {
                    warn!(error = %e, "Task panicked");
                    attempts.push(UpstreamFailure::new("<task>", e.to_string()));
                }
            }
        }

        for handle in &abort_handles {
            handle.abort();
        }

        winner.ok_or(DomainError::AllUpstreamsFailed { attempts })
    }
}

impl Default for RaceStrategy {
    fn default() -> Self {
        Self::new()
    }
}
