//! Drops one specific censorship-detection probe.
//!
//! The probe is a Go `net/http` client POSTing a fixed `twitter.com IN A`
//! query. Every header listed below and the body after the message ID must
//! match exactly; any deviation is proxied normally.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::handlers::MAX_DNS_MESSAGE_LEN;

const PROBE_ACCEPT: &str = "application/dns-message";
const PROBE_CONTENT_LENGTH: &str = "29";
const PROBE_USER_AGENTS: [&str; 2] = ["Go-http-client/1.1", "Go-http-client/2.0"];
const PROBE_ACCEPT_ENCODINGS: [&str; 2] = ["gzip", "gzip, br"];

/// Probe body from byte 2 on: flags 0x0110, one question, `twitter.com A IN`.
const PROBE_BODY_TAIL: [u8; 27] = [
    0x01, 0x10, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, b't', b'w', b'i', b't',
    b't', b'e', b'r', 0x03, b'c', b'o', b'm', 0x00, 0x00, 0x01, 0x00, 0x01,
];

pub async fn reject_probe(request: Request, next: Next) -> Response {
    if request.method() != Method::POST || !is_probe_headers(request.headers()) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_DNS_MESSAGE_LEN).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Failed to buffer request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if is_probe_body(&bytes) {
        info!("Rejected fingerprinted probe");
        return StatusCode::FORBIDDEN.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

pub fn is_probe_headers(headers: &HeaderMap) -> bool {
    let value = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());

    value(header::ACCEPT) == Some(PROBE_ACCEPT)
        && value(header::CONTENT_LENGTH) == Some(PROBE_CONTENT_LENGTH)
        && value(header::USER_AGENT).is_some_and(|ua| PROBE_USER_AGENTS.contains(&ua))
        && value(header::ACCEPT_ENCODING).is_some_and(|ae| PROBE_ACCEPT_ENCODINGS.contains(&ae))
}

pub fn is_probe_body(body: &[u8]) -> bool {
    body.get(2..) == Some(&PROBE_BODY_TAIL[..])
}
