//! HTTPS transport towards upstream resolvers
//!
//! Wire queries are sent as RFC 8484 POST requests, JSON queries as GET
//! requests with the caller's query string appended:
//! ```text
//! POST /dns-query HTTP/2                 GET /resolve?name=example.com HTTP/2
//! Content-Type: application/dns-message  Accept: application/dns-json
//! Accept: application/dns-message        X-Forwarded-For: 198.51.100.7
//! X-Forwarded-For: 198.51.100.7
//!
//! <raw DNS message bytes>
//! ```

use super::UpstreamTransport;
use async_trait::async_trait;
use ferrous_doh_application::ports::{
    UpstreamQuery, UpstreamRequest, UpstreamResponse, DNS_JSON_CONTENT_TYPE,
    DNS_MESSAGE_CONTENT_TYPE,
};
use ferrous_doh_domain::DomainError;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("ferrous-doh/", env!("CARGO_PKG_VERSION"));
const X_FORWARDED_FOR: &str = "x-forwarded-for";

pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    pub fn new() -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(&self, endpoint: &str, request: &UpstreamRequest) -> reqwest::RequestBuilder {
        let builder = match &request.query {
            UpstreamQuery::Wire(message) => self
                .client
                .post(endpoint)
                .header(CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)
                .header(ACCEPT, DNS_MESSAGE_CONTENT_TYPE)
                .body(message.clone()),
            UpstreamQuery::Json { query_string } => self
                .client
                .get(json_url(endpoint, query_string))
                .header(ACCEPT, DNS_JSON_CONTENT_TYPE),
        };

        match request.client_ip.as_deref() {
            Some(ip) => builder.header(X_FORWARDED_FOR, ip),
            None => builder,
        }
    }

    async fn exchange(
        &self,
        endpoint: &str,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, reqwest::Error> {
        let response = self.build(endpoint, request).send().await?;

        let status = response.status().as_u16();
        let headers = response.headers();
        let content_type = header_string(headers, CONTENT_TYPE);
        let cache_control = header_string(headers, CACHE_CONTROL);
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            content_type,
            cache_control,
            body,
            upstream: Arc::from(endpoint),
        })
    }
}

#[async_trait]
impl UpstreamTransport for HttpsTransport {
    async fn send(
        &self,
        endpoint: &str,
        request: &UpstreamRequest,
        timeout: Duration,
    ) -> Result<UpstreamResponse, DomainError> {
        debug!(
            url = %endpoint,
            kind = request.query.kind(),
            "Sending upstream query"
        );

        let response = tokio::time::timeout(timeout, self.exchange(endpoint, request))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: endpoint.to_string(),
            })?
            .map_err(|e| DomainError::TransportFailure {
                server: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            url = %endpoint,
            status = response.status,
            response_len = response.body.len(),
            "Upstream response received"
        );

        Ok(response)
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}

fn json_url(endpoint: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        return endpoint.to_string();
    }
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, query_string)
}

fn header_string(
    headers: &reqwest::header::HeaderMap,
    name: reqwest::header::HeaderName,
) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
