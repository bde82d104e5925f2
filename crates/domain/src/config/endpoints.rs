use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::errors::ConfigError;

/// Wire-format (RFC 8484) upstreams used when none are configured.
pub const DEFAULT_DNS_ENDPOINTS: &[&str] = &[
    "https://dns.google/dns-query",
    "https://8.8.8.8/dns-query",
    "https://8.8.4.4/dns-query",
    "https://[2001:4860:4860::8888]/dns-query",
    "https://[2001:4860:4860::8844]/dns-query",
];

/// JSON API upstreams used when none are configured.
pub const DEFAULT_API_ENDPOINTS: &[&str] = &[
    "https://dns.google/resolve",
    "https://8.8.8.8/resolve",
    "https://8.8.4.4/resolve",
    "https://[2001:4860:4860::8888]/resolve",
    "https://[2001:4860:4860::8844]/resolve",
];

pub fn default_dns_endpoints() -> Vec<String> {
    to_owned_list(DEFAULT_DNS_ENDPOINTS)
}

pub fn default_api_endpoints() -> Vec<String> {
    to_owned_list(DEFAULT_API_ENDPOINTS)
}

fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Parses an endpoint list given either as a bare URL or as JSON.
///
/// Accepted forms:
/// - `https://dns.example/dns-query`
/// - `"https://dns.example/dns-query"`
/// - `["https://a/dns-query", "https://b/dns-query"]`
/// - `['https://a/dns-query', 'https://b/dns-query']`
///
/// Entries are trimmed and empty ones dropped. Anything that looks like JSON
/// but does not parse as a string or an array of strings is an error; callers
/// decide whether to fall back to the raw value.
pub fn parse_endpoint_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if !trimmed.starts_with(['[', '"', '\'']) {
        return Ok(vec![trimmed.to_string()]);
    }

    let normalized = trimmed.replace('\'', "\"");
    let value: Value = serde_json::from_str(&normalized)
        .map_err(|e| ConfigError::Parse(format!("endpoint list {:?}: {}", trimmed, e)))?;

    let entries = match value {
        Value::String(url) => vec![url],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(url) => Ok(url),
                other => Err(ConfigError::Parse(format!(
                    "endpoint list entry {} is not a string",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(ConfigError::Parse(format!(
                "endpoint list must be a string or an array, got {}",
                other
            )))
        }
    };

    Ok(entries
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEndpoints {
    One(String),
    Many(Vec<String>),
}

/// Serde adapter so TOML accepts both `dns = "..."` and `dns = ["...", "..."]`.
///
/// A string that fails lenient parsing is kept verbatim; validation rejects it
/// later if it is not a URL.
pub(crate) fn deserialize_endpoints<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawEndpoints::deserialize(deserializer)? {
        RawEndpoints::One(raw) => {
            parse_endpoint_list(&raw).unwrap_or_else(|_| vec![raw.trim().to_string()])
        }
        RawEndpoints::Many(list) => list
            .into_iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect(),
    })
}
