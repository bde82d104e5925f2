use crate::state::{AppState, ClientIpPolicy};
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{request::Parts, HeaderMap};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Client address as seen by the proxy, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl ClientIp {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = if state.client_ip.trust_peer_address {
            ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
                .await
                .ok()
                .map(|ConnectInfo(addr)| addr)
        } else {
            None
        };

        Ok(Self(resolve_client_ip(&state.client_ip, &parts.headers, peer)))
    }
}

/// First entry of the configured header, else the canonical peer address.
pub fn resolve_client_ip(
    policy: &ClientIpPolicy,
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
) -> Option<String> {
    let from_header = policy
        .header
        .as_ref()
        .and_then(|name| headers.get(name))
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        peer.filter(|_| policy.trust_peer_address)
            .map(|addr| addr.ip().to_canonical().to_string())
    })
}
