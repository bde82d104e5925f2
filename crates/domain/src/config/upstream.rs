use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::endpoints::{default_api_endpoints, default_dns_endpoints, deserialize_endpoints};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// RFC 8484 endpoints receiving wire-format queries.
    #[serde(
        default = "default_dns_endpoints",
        deserialize_with = "deserialize_endpoints"
    )]
    pub dns: Vec<String>,

    /// JSON API endpoints receiving `/resolve` passthrough queries.
    #[serde(
        default = "default_api_endpoints",
        deserialize_with = "deserialize_endpoints"
    )]
    pub api: Vec<String>,

    #[serde(default)]
    pub strategy: UpstreamStrategy,

    /// Deadline for a single upstream attempt.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            dns: default_dns_endpoints(),
            api: default_api_endpoints(),
            strategy: UpstreamStrategy::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStrategy {
    /// Query every endpoint at once, first HTTP 200 wins.
    Race,

    /// Try endpoints one at a time in random order.
    #[default]
    Sequential,
}

impl UpstreamStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Race => "race",
            Self::Sequential => "sequential",
        }
    }

    /// Interprets the `CONCURRENT` deployment flag.
    pub fn from_concurrent_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Self::Race,
            _ => Self::Sequential,
        }
    }
}

impl fmt::Display for UpstreamStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpstreamStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "race" | "concurrent" | "parallel" => Ok(Self::Race),
            "sequential" | "failover" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown upstream strategy '{}', expected 'race' or 'sequential'",
                other
            )),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
