mod upstream_resolver;

pub use upstream_resolver::{
    UpstreamQuery, UpstreamRequest, UpstreamResolver, UpstreamResponse, DNS_JSON_CONTENT_TYPE,
    DNS_MESSAGE_CONTENT_TYPE,
};
