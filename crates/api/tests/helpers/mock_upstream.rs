#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use ferrous_doh_api::{create_doh_routes, AppState, ClientIpPolicy};
use ferrous_doh_application::ports::{
    UpstreamQuery, UpstreamRequest, UpstreamResolver, UpstreamResponse,
};
use ferrous_doh_application::use_cases::{ProxyDnsQueryUseCase, ResolveJsonQueryUseCase};
use ferrous_doh_domain::{DomainError, UpstreamFailure};
use std::sync::{Arc, Mutex};

pub const WIRE_ANSWER: &[u8] = &[0xAB, 0xCD, 0x81, 0x80, 0, 1, 0, 1, 0, 0, 0, 0];
pub const JSON_ANSWER: &str = r#"{"Status":0,"Answer":[]}"#;

#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    should_fail: bool,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_wire_message(&self) -> Bytes {
        match self.requests().last().map(|r| r.query.clone()) {
            Some(UpstreamQuery::Wire(message)) => message,
            other => panic!("expected a wire request, got {:?}", other),
        }
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(&self, request: UpstreamRequest) -> Result<UpstreamResponse, DomainError> {
        let query = request.query.clone();
        self.requests.lock().unwrap().push(request);

        if self.should_fail {
            return Err(DomainError::AllUpstreamsFailed {
                attempts: vec![
                    UpstreamFailure::new("https://a/dns-query", "timeout"),
                    UpstreamFailure::new("https://b/dns-query", "HTTP 502"),
                ],
            });
        }

        Ok(match query {
            UpstreamQuery::Wire(_) => UpstreamResponse {
                status: 200,
                content_type: Some("application/octet-stream".to_string()),
                cache_control: Some("max-age=120".to_string()),
                body: Bytes::from_static(WIRE_ANSWER),
                upstream: Arc::from("https://a/dns-query"),
            },
            UpstreamQuery::Json { .. } => UpstreamResponse {
                status: 200,
                content_type: Some("application/x-javascript; charset=UTF-8".to_string()),
                cache_control: None,
                body: Bytes::from_static(JSON_ANSWER.as_bytes()),
                upstream: Arc::from("https://a/resolve"),
            },
        })
    }
}

pub fn test_app(resolver: &MockUpstreamResolver) -> Router {
    let resolver: Arc<dyn UpstreamResolver> = Arc::new(resolver.clone());
    let state = AppState {
        proxy_dns: Arc::new(ProxyDnsQueryUseCase::new(Arc::clone(&resolver))),
        resolve_json: Arc::new(ResolveJsonQueryUseCase::new(resolver)),
        client_ip: Arc::new(ClientIpPolicy::default()),
    };
    create_doh_routes(state)
}

/// `example.com IN A`, no additional records.
pub fn query_without_opt() -> Vec<u8> {
    let mut msg = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
    msg.extend_from_slice(&[
        7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00,
        0x01,
    ]);
    msg
}

/// The 29-byte fingerprinted probe query with the given message ID.
pub fn probe_body(id: [u8; 2]) -> Vec<u8> {
    let mut body = id.to_vec();
    body.extend_from_slice(&[
        0x01, 0x10, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, b't', b'w', b'i', b't',
        b't', b'e', b'r', 0x03, b'c', b'o', b'm', 0x00, 0x00, 0x01, 0x00, 0x01,
    ]);
    body
}
