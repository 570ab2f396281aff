use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL applied to cached messages that carry no answer records.
    pub default_ttl: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { default_ttl: 60 }
    }
}
