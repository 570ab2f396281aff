use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Settings for iterative resolution from the root hint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// IPv4 address of the root server every resolution starts from.
    pub root_hint: String,

    /// Upstream exchanges allowed per resolution before giving up.
    pub max_hops: u8,

    /// Deadline for a single upstream send + receive.
    pub query_timeout_ms: u64,

    /// How deep nameserver-address lookups may nest inside each other.
    pub max_referral_depth: u8,

    /// Receive buffer for upstream replies.
    pub upstream_buffer_size: usize,
}

impl ResolverConfig {
    pub fn root_hint_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        self.root_hint.trim().parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid root hint address: {}", self.root_hint))
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_hint: "198.41.0.4".to_string(),
            max_hops: 7,
            query_timeout_ms: 2000,
            max_referral_depth: 4,
            upstream_buffer_size: 1024,
        }
    }
}
