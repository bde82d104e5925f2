use super::dns_query::insert_cache_control;
use crate::errors::ApiError;
use crate::extractors::ClientIp;
use crate::state::AppState;
use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_doh_application::ports::DNS_JSON_CONTENT_TYPE;
use tracing::debug;

/// GET /resolve?name=<domain>&... passed through to the JSON API pool
pub async fn get_resolve(
    State(state): State<AppState>,
    client_ip: ClientIp,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let query = query.unwrap_or_default();
    debug!(client_ip = ?client_ip.as_deref(), query = %query, "GET /resolve");

    let upstream = state
        .resolve_json
        .execute(&query, client_ip.as_deref())
        .await?;

    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DNS_JSON_CONTENT_TYPE));

    let mut response = (StatusCode::OK, upstream.body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    insert_cache_control(headers, upstream.cache_control.as_deref());
    Ok(response)
}
