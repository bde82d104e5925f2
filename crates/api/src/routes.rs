use crate::handlers::{self, MAX_DNS_MESSAGE_LEN};
use crate::middleware::reject_probe;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_doh_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dns-query",
            get(handlers::get_dns_query)
                .post(handlers::post_dns_query)
                .fallback(handlers::unsupported_method)
                .layer(middleware::from_fn(reject_probe)),
        )
        .route(
            "/resolve",
            get(handlers::get_resolve).fallback(handlers::unsupported_method),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_DNS_MESSAGE_LEN))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
