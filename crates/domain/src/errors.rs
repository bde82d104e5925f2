use std::fmt;
use thiserror::Error;

/// One failed upstream attempt, kept so pool exhaustion can be reported in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamFailure {
    pub endpoint: String,
    pub reason: String,
}

impl UpstreamFailure {
    pub fn new(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.endpoint, self.reason)
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid client address: {0}")]
    InvalidAddress(String),

    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("All upstream servers failed ({} attempts)", .attempts.len())]
    AllUpstreamsFailed { attempts: Vec<UpstreamFailure> },

    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport failure for {server}: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Joined `endpoint: reason` list for pool exhaustion, empty otherwise.
    pub fn attempts_summary(&self) -> String {
        match self {
            Self::AllUpstreamsFailed { attempts } => attempts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
            _ => String::new(),
        }
    }
}
