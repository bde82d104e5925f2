use crate::errors::ApiError;
use crate::extractors::ClientIp;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use bytes::Bytes;
use ferrous_doh_application::ports::{UpstreamResponse, DNS_MESSAGE_CONTENT_TYPE};
use ferrous_doh_domain::DomainError;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
pub struct DnsQueryParams {
    pub dns: Option<String>,
}

/// GET /dns-query?dns=<base64url>
pub async fn get_dns_query(
    State(state): State<AppState>,
    client_ip: ClientIp,
    Query(params): Query<DnsQueryParams>,
) -> Result<Response, ApiError> {
    let encoded = params.dns.ok_or_else(|| {
        DomainError::UnsupportedRequest("missing 'dns' query parameter".to_string())
    })?;
    let message = decode_dns_param(&encoded)?;

    debug!(client_ip = ?client_ip.as_deref(), len = message.len(), "GET /dns-query");

    let response = state
        .proxy_dns
        .execute(message, client_ip.as_deref())
        .await?;
    Ok(wire_response(response))
}

/// POST /dns-query with an `application/dns-message` body
pub async fn post_dns_query(
    State(state): State<AppState>,
    client_ip: ClientIp,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !is_dns_message(&headers) {
        return Err(DomainError::UnsupportedRequest(format!(
            "content type must be {}",
            DNS_MESSAGE_CONTENT_TYPE
        ))
        .into());
    }

    debug!(client_ip = ?client_ip.as_deref(), len = body.len(), "POST /dns-query");

    let response = state.proxy_dns.execute(body, client_ip.as_deref()).await?;
    Ok(wire_response(response))
}

/// Base64url without padding per RFC 8484, trailing `=` tolerated.
pub fn decode_dns_param(encoded: &str) -> Result<Bytes, DomainError> {
    URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map(Bytes::from)
        .map_err(|e| DomainError::MalformedQuery(format!("invalid base64url 'dns' parameter: {}", e)))
}

fn is_dns_message(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(DNS_MESSAGE_CONTENT_TYPE))
}

fn wire_response(upstream: UpstreamResponse) -> Response {
    let mut response = (StatusCode::OK, upstream.body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE),
    );
    insert_cache_control(headers, upstream.cache_control.as_deref());
    response
}

pub(crate) fn insert_cache_control(headers: &mut HeaderMap, cache_control: Option<&str>) {
    if let Some(value) = cache_control.and_then(|v| HeaderValue::from_str(v).ok()) {
        headers.insert(header::CACHE_CONTROL, value);
    }
}
