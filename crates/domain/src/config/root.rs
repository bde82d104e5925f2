use serde::{Deserialize, Serialize};

use super::ecs::EcsConfig;
use super::endpoints::{default_api_endpoints, default_dns_endpoints};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::{UpstreamConfig, UpstreamStrategy};

const LOCAL_CONFIG_PATH: &str = "ferrous-doh.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-doh/config.toml";

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener and client address detection
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream pools and selection strategy
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// EDNS Client Subnet injection
    #[serde(default)]
    pub ecs: EcsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    ///
    /// Overrides are applied on top, then empty endpoint lists are replaced by
    /// the built-in public resolvers.
    pub fn load(path: Option<&str>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        config.normalize_endpoints();
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(strategy) = overrides.strategy {
            self.upstream.strategy = strategy;
        }
        if let Some(dns) = overrides.dns_endpoints {
            self.upstream.dns = dns;
        }
        if let Some(api) = overrides.api_endpoints {
            self.upstream.api = api;
        }
        if let Some(prefix) = overrides.ipv4_prefix {
            self.ecs.ipv4_prefix = prefix;
        }
        if let Some(prefix) = overrides.ipv6_prefix {
            self.ecs.ipv6_prefix = prefix;
        }
    }

    /// Empty endpoint lists fall back to the built-in defaults.
    pub fn normalize_endpoints(&mut self) {
        if self.upstream.dns.is_empty() {
            self.upstream.dns = default_dns_endpoints();
        }
        if self.upstream.api.is_empty() {
            self.upstream.api = default_api_endpoints();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.ecs.ipv4_prefix > 32 {
            return Err(ConfigError::Validation(format!(
                "IPv4 ECS prefix {} exceeds 32",
                self.ecs.ipv4_prefix
            )));
        }

        if self.ecs.ipv6_prefix > 128 {
            return Err(ConfigError::Validation(format!(
                "IPv6 ECS prefix {} exceeds 128",
                self.ecs.ipv6_prefix
            )));
        }

        for (pool, endpoints) in [("dns", &self.upstream.dns), ("api", &self.upstream.api)] {
            if endpoints.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "No '{}' upstream endpoints configured",
                    pool
                )));
            }
            if let Some(bad) = endpoints
                .iter()
                .find(|url| !url.starts_with("https://") && !url.starts_with("http://"))
            {
                return Err(ConfigError::Validation(format!(
                    "Upstream endpoint '{}' in '{}' is not an http(s) URL",
                    bad, pool
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Values coming from the environment and the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub strategy: Option<UpstreamStrategy>,
    pub dns_endpoints: Option<Vec<String>>,
    pub api_endpoints: Option<Vec<String>>,
    pub ipv4_prefix: Option<u8>,
    pub ipv6_prefix: Option<u8>,
}
