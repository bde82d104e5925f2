use ferrous_doh_domain::config::parse_endpoint_list;
use ferrous_doh_domain::{Config, ConfigOverrides, UpstreamStrategy};
use tracing::{info, warn};

/// Overrides read from the deployment environment variables
/// `DNS`, `API`, `IPV4_PREFIX`, `IPV6_PREFIX` and `CONCURRENT`.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub overrides: ConfigOverrides,
    warnings: Vec<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut env = Self::default();

        let dns_endpoints = lookup("DNS").map(|raw| env.endpoints("DNS", &raw));
        let api_endpoints = lookup("API").map(|raw| env.endpoints("API", &raw));
        let ipv4_prefix = lookup("IPV4_PREFIX").and_then(|raw| env.prefix("IPV4_PREFIX", &raw));
        let ipv6_prefix = lookup("IPV6_PREFIX").and_then(|raw| env.prefix("IPV6_PREFIX", &raw));
        let strategy = lookup("CONCURRENT").map(|raw| UpstreamStrategy::from_concurrent_flag(&raw));

        env.overrides = ConfigOverrides {
            dns_endpoints,
            api_endpoints,
            ipv4_prefix,
            ipv6_prefix,
            strategy,
            ..Default::default()
        };
        env
    }

    /// Logs what was skipped or reinterpreted; call once logging is up.
    pub fn report(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }

    fn endpoints(&mut self, key: &str, raw: &str) -> Vec<String> {
        parse_endpoint_list(raw).unwrap_or_else(|e| {
            self.warnings
                .push(format!("{}: {}, using the raw value as a single endpoint", key, e));
            vec![raw.trim().to_string()]
        })
    }

    fn prefix(&mut self, key: &str, raw: &str) -> Option<u8> {
        match raw.trim().parse::<u8>() {
            Ok(prefix) => Some(prefix),
            Err(e) => {
                self.warnings
                    .push(format!("{}: ignoring invalid prefix {:?}: {}", key, raw, e));
                None
            }
        }
    }
}

/// Values in `top` win over values in `base`.
pub fn layer_overrides(base: ConfigOverrides, top: ConfigOverrides) -> ConfigOverrides {
    ConfigOverrides {
        port: top.port.or(base.port),
        bind_address: top.bind_address.or(base.bind_address),
        log_level: top.log_level.or(base.log_level),
        strategy: top.strategy.or(base.strategy),
        dns_endpoints: top.dns_endpoints.or(base.dns_endpoints),
        api_endpoints: top.api_endpoints.or(base.api_endpoints),
        ipv4_prefix: top.ipv4_prefix.or(base.ipv4_prefix),
        ipv6_prefix: top.ipv6_prefix.or(base.ipv6_prefix),
    }
}

pub fn load_config(path: Option<&str>, overrides: ConfigOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    if let Some(path) = path.map(str::to_string).or_else(Config::get_config_path) {
        info!(path = %path, "Configuration loaded");
    }

    Ok(config)
}
