#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{UpstreamRequest, UpstreamResponse};
use ferrous_doh_domain::DomainError;
use ferrous_doh_infrastructure::dns::UpstreamTransport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a scripted endpoint does when called.
#[derive(Clone, Copy)]
pub enum Reply {
    /// Answer with this status after an optional delay (ms).
    Status(u16, u64),
    /// Connection-level failure.
    Fail,
    /// Deadline expiry.
    Timeout,
}

/// Transport whose per-endpoint behavior is fixed up front.
#[derive(Clone)]
pub struct ScriptedTransport {
    replies: Arc<HashMap<String, Reply>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new(replies: &[(&str, Reply)]) -> Self {
        Self {
            replies: Arc::new(
                replies
                    .iter()
                    .map(|(endpoint, reply)| (endpoint.to_string(), *reply))
                    .collect(),
            ),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl UpstreamTransport for ScriptedTransport {
    async fn send(
        &self,
        endpoint: &str,
        _request: &UpstreamRequest,
        _timeout: Duration,
    ) -> Result<UpstreamResponse, DomainError> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        match self.replies.get(endpoint).copied().unwrap_or(Reply::Fail) {
            Reply::Status(status, delay_ms) => {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Ok(UpstreamResponse {
                    status,
                    content_type: Some("application/dns-message".to_string()),
                    cache_control: None,
                    body: Bytes::from(endpoint.to_string()),
                    upstream: Arc::from(endpoint),
                })
            }
            Reply::Fail => Err(DomainError::TransportFailure {
                server: endpoint.to_string(),
                reason: "connection refused".to_string(),
            }),
            Reply::Timeout => Err(DomainError::TransportTimeout {
                server: endpoint.to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}

pub fn endpoints(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
