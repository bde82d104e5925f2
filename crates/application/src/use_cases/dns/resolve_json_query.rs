use crate::ports::{UpstreamRequest, UpstreamResolver, UpstreamResponse};
use ferrous_doh_domain::DomainError;
use std::sync::Arc;

/// Passes a `/resolve` query string through to the JSON API pool.
pub struct ResolveJsonQueryUseCase {
    resolver: Arc<dyn UpstreamResolver>,
}

impl ResolveJsonQueryUseCase {
    pub fn new(resolver: Arc<dyn UpstreamResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        query_string: &str,
        client_ip: Option<&str>,
    ) -> Result<UpstreamResponse, DomainError> {
        if !has_name_parameter(query_string) {
            return Err(DomainError::UnsupportedRequest(
                "missing 'name' query parameter".to_string(),
            ));
        }

        self.resolver
            .resolve(UpstreamRequest::json(query_string, client_ip))
            .await
    }
}

fn has_name_parameter(query_string: &str) -> bool {
    query_string
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .any(|(key, value)| key == "name" && !value.is_empty())
}
