pub mod dns_query;
pub mod fallback;
pub mod resolve;

pub use dns_query::{get_dns_query, post_dns_query};
pub use fallback::{not_found, unsupported_method};
pub use resolve::get_resolve;

/// Largest DNS message accepted in a POST body.
pub const MAX_DNS_MESSAGE_LEN: usize = 65535;
