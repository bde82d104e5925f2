pub mod ecs;
pub mod endpoints;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use ecs::EcsConfig;
pub use endpoints::{parse_endpoint_list, DEFAULT_API_ENDPOINTS, DEFAULT_DNS_ENDPOINTS};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{Config, ConfigOverrides};
pub use server::ServerConfig;
pub use upstream::{UpstreamConfig, UpstreamStrategy};
