use serde::{Deserialize, Serialize};

/// Where the local override table comes from and how its answers are served.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalRecordsConfig {
    /// JSON document mapping domain names to IPv4 addresses.
    pub path: String,

    pub ttl: u32,
}

impl Default for LocalRecordsConfig {
    fn default() -> Self {
        Self {
            path: "config.json".to_string(),
            ttl: 600,
        }
    }
}
