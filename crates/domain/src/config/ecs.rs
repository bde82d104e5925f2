use serde::{Deserialize, Serialize};

use crate::wire::EcsPrefixes;

/// EDNS Client Subnet injection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EcsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_ipv4_prefix")]
    pub ipv4_prefix: u8,

    #[serde(default = "default_ipv6_prefix")]
    pub ipv6_prefix: u8,

    /// Also overwrite the low FLAGS byte with 32 like the legacy proxy did.
    #[serde(default)]
    pub legacy_flags_rewrite: bool,
}

impl EcsConfig {
    pub fn prefixes(&self) -> EcsPrefixes {
        EcsPrefixes::new(self.ipv4_prefix, self.ipv6_prefix)
    }
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ipv4_prefix: default_ipv4_prefix(),
            ipv6_prefix: default_ipv6_prefix(),
            legacy_flags_rewrite: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ipv4_prefix() -> u8 {
    32
}

fn default_ipv6_prefix() -> u8 {
    128
}
