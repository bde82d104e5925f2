use super::race::RaceStrategy;
use super::sequential::SequentialStrategy;
use crate::dns::transport::UpstreamTransport;
use ferrous_doh_application::ports::{UpstreamRequest, UpstreamResponse};
use ferrous_doh_domain::{DomainError, UpstreamFailure, UpstreamStrategy};
use std::sync::Arc;
use std::time::Duration;

/// Everything a strategy needs for one request.
pub struct QueryContext<'a> {
    pub transport: &'a Arc<dyn UpstreamTransport>,
    pub endpoints: &'a [Arc<str>],
    pub request: &'a UpstreamRequest,
    pub timeout: Duration,
}

pub enum Strategy {
    Race(RaceStrategy),
    Sequential(SequentialStrategy),
}

impl Strategy {
    pub async fn query(&self, ctx: &QueryContext<'_>) -> Result<UpstreamResponse, DomainError> {
        match self {
            Self::Race(s) => s.query(ctx).await,
            Self::Sequential(s) => s.query(ctx).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Race(_) => "race",
            Self::Sequential(_) => "sequential",
        }
    }
}

impl From<UpstreamStrategy> for Strategy {
    fn from(strategy: UpstreamStrategy) -> Self {
        match strategy {
            UpstreamStrategy::Race => Self::Race(RaceStrategy::new()),
            UpstreamStrategy::Sequential => Self::Sequential(SequentialStrategy::new()),
        }
    }
}

pub(super) fn non_success(response: &UpstreamResponse) -> UpstreamFailure {
    UpstreamFailure::new(
        response.upstream.as_ref(),
        format!("HTTP {}", response.status),
    )
}

pub(super) fn transport_failure(endpoint: &str, error: &DomainError) -> UpstreamFailure {
    let reason = match error {
        DomainError::TransportTimeout { .. } => "timeout".to_string(),
        DomainError::TransportFailure { reason, .. } => reason.clone(),
        other => other.to_string(),
    };
    UpstreamFailure::new(endpoint, reason)
}
