use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Header carrying the original client address, first entry wins.
    /// Set to an empty string to ignore forwarding headers entirely.
    #[serde(default = "default_client_ip_header")]
    pub client_ip_header: String,

    /// Fall back to the TCP peer address when the header is absent.
    #[serde(default = "default_true")]
    pub trust_peer_address: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            client_ip_header: default_client_ip_header(),
            trust_peer_address: true,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_client_ip_header() -> String {
    "x-forwarded-for".to_string()
}

fn default_true() -> bool {
    true
}
