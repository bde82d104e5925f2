use axum::http::HeaderName;
use ferrous_doh_application::use_cases::{ProxyDnsQueryUseCase, ResolveJsonQueryUseCase};
use ferrous_doh_domain::config::ServerConfig;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub proxy_dns: Arc<ProxyDnsQueryUseCase>,
    pub resolve_json: Arc<ResolveJsonQueryUseCase>,
    pub client_ip: Arc<ClientIpPolicy>,
}

/// Where the client address comes from.
#[derive(Debug, Clone)]
pub struct ClientIpPolicy {
    /// Header whose first comma-separated entry is the client address.
    pub header: Option<HeaderName>,
    /// Fall back to the TCP peer when the header is absent.
    pub trust_peer_address: bool,
}

impl ClientIpPolicy {
    pub fn from_config(server: &ServerConfig) -> Self {
        let raw = server.client_ip_header.trim();
        let header = if raw.is_empty() {
            None
        } else {
            match HeaderName::from_bytes(raw.to_ascii_lowercase().as_bytes()) {
                Ok(name) => Some(name),
                Err(e) => {
                    warn!(header = %raw, error = %e, "Ignoring invalid client IP header name");
                    None
                }
            }
        };

        Self {
            header,
            trust_peer_address: server.trust_peer_address,
        }
    }
}

impl Default for ClientIpPolicy {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}
