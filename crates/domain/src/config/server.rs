use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub dns_port: u16,

    pub bind_address: String,

    /// Upper bound on queries resolved at the same time. `0` disables the
    /// limit and spawns one task per datagram with no cap.
    pub max_concurrent_queries: usize,
}

impl ServerConfig {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.dns_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: 8083,
            bind_address: "0.0.0.0".to_string(),
            max_concurrent_queries: 1024,
        }
    }
}
