use super::strategy::{QueryContext, Strategy};
use crate::dns::transport::{HttpsTransport, UpstreamTransport};
use async_trait::async_trait;
use ferrous_doh_application::ports::{
    UpstreamQuery, UpstreamRequest, UpstreamResolver, UpstreamResponse,
};
use ferrous_doh_domain::{Config, DomainError, UpstreamStrategy};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The wire-format pool and the JSON API pool, sharing one transport and one
/// selection strategy.
pub struct PoolManager {
    dns: Vec<Arc<str>>,
    api: Vec<Arc<str>>,
    strategy: Strategy,
    transport: Arc<dyn UpstreamTransport>,
    timeout: Duration,
}

impl PoolManager {
    pub fn new(
        dns: &[String],
        api: &[String],
        strategy: UpstreamStrategy,
        transport: Arc<dyn UpstreamTransport>,
        timeout: Duration,
    ) -> Self {
        Self {
            dns: dns.iter().map(|s| Arc::from(s.as_str())).collect(),
            api: api.iter().map(|s| Arc::from(s.as_str())).collect(),
            strategy: Strategy::from(strategy),
            transport,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let transport: Arc<dyn UpstreamTransport> = Arc::new(HttpsTransport::new()?);
        let pool = Self::new(
            &config.upstream.dns,
            &config.upstream.api,
            config.upstream.strategy,
            transport,
            Duration::from_millis(config.upstream.timeout_ms),
        );

        info!(
            strategy = pool.strategy_name(),
            protocol = pool.transport.protocol_name(),
            dns_endpoints = pool.dns.len(),
            api_endpoints = pool.api.len(),
            timeout_ms = config.upstream.timeout_ms,
            "Upstream pools configured"
        );
        for endpoint in pool.dns.iter().chain(pool.api.iter()) {
            debug!(endpoint = %endpoint, "Upstream endpoint");
        }

        Ok(pool)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn dns_endpoints(&self) -> &[Arc<str>] {
        &self.dns
    }

    pub fn api_endpoints(&self) -> &[Arc<str>] {
        &self.api
    }

    fn endpoints_for(&self, query: &UpstreamQuery) -> &[Arc<str>] {
        match query {
            UpstreamQuery::Wire(_) => &self.dns,
            UpstreamQuery::Json { .. } => &self.api,
        }
    }
}

#[async_trait]
impl UpstreamResolver for PoolManager {
    async fn resolve(&self, request: UpstreamRequest) -> Result<UpstreamResponse, DomainError> {
        let ctx = QueryContext {
            transport: &self.transport,
            endpoints: self.endpoints_for(&request.query),
            request: &request,
            timeout: self.timeout,
        };
        self.strategy.query(&ctx).await
    }
}
