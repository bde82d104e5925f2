pub mod proxy_dns_query;
pub mod resolve_json_query;

pub use proxy_dns_query::ProxyDnsQueryUseCase;
pub use resolve_json_query::ResolveJsonQueryUseCase;
