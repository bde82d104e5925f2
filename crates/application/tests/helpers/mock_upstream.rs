#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{
    UpstreamRequest, UpstreamResolver, UpstreamResponse, DNS_MESSAGE_CONTENT_TYPE,
};
use ferrous_doh_domain::{DomainError, UpstreamFailure};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned response.
#[derive(Clone)]
pub struct MockUpstreamResolver {
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
    should_fail: Arc<Mutex<bool>>,
    body: Bytes,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
            body: Bytes::from_static(&[0xAB, 0xCD, 0x81, 0x80]),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> UpstreamRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn body(&self) -> Bytes {
        self.body.clone()
    }
}

impl Default for MockUpstreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(&self, request: UpstreamRequest) -> Result<UpstreamResponse, DomainError> {
        self.requests.lock().unwrap().push(request);

        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::AllUpstreamsFailed {
                attempts: vec![UpstreamFailure::new("https://mock/dns-query", "HTTP 502")],
            });
        }

        Ok(UpstreamResponse {
            status: 200,
            content_type: Some(DNS_MESSAGE_CONTENT_TYPE.to_string()),
            cache_control: Some("max-age=300".to_string()),
            body: self.body.clone(),
            upstream: Arc::from("https://mock/dns-query"),
        })
    }
}

/// `example.com IN A` query, optionally with a bare OPT record in the
/// additional section.
pub fn wire_query(with_opt: bool) -> Bytes {
    let mut msg = vec![
        0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        if with_opt { 0x01 } else { 0x00 },
    ];
    msg.extend_from_slice(&[
        7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
    ]);
    msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    if with_opt {
        msg.extend_from_slice(&[0x00, 0x00, 0x29, 0x10, 0x00, 0, 0, 0, 0, 0x00, 0x00]);
    }
    Bytes::from(msg)
}
