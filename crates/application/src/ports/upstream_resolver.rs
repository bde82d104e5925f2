use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DomainError;
use std::sync::Arc;

/// Content type of RFC 8484 wire-format messages.
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// Content type of the JSON resolve API.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// What gets sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamQuery {
    /// RFC 8484 message, POSTed as the request body.
    Wire(Bytes),

    /// Raw query string appended to a JSON API endpoint.
    Json { query_string: Arc<str> },
}

impl UpstreamQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Wire(_) => "wire",
            Self::Json { .. } => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub query: UpstreamQuery,
    /// Forwarded as `X-Forwarded-For` when known.
    pub client_ip: Option<Arc<str>>,
}

impl UpstreamRequest {
    pub fn wire(message: Bytes, client_ip: Option<&str>) -> Self {
        Self {
            query: UpstreamQuery::Wire(message),
            client_ip: client_ip.map(Arc::from),
        }
    }

    pub fn json(query_string: &str, client_ip: Option<&str>) -> Self {
        Self {
            query: UpstreamQuery::Json {
                query_string: Arc::from(query_string),
            },
            client_ip: client_ip.map(Arc::from),
        }
    }
}

/// Upstream answer passed back to the caller untouched.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub body: Bytes,
    /// Endpoint that produced this response.
    pub upstream: Arc<str>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(&self, request: UpstreamRequest) -> Result<UpstreamResponse, DomainError>;
}
