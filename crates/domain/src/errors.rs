use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("DNS packet carries no question")]
    NoQuestion,

    #[error("Upstream timeout waiting for {server}")]
    UpstreamTimeout { server: String },

    #[error("Upstream {server} unreachable: {reason}")]
    UpstreamUnreachable { server: String, reason: String },

    #[error("Invalid response from upstream {server}: {reason}")]
    InvalidUpstreamResponse { server: String, reason: String },

    #[error("Resolution failed: reached a dead end")]
    DeadEnd,

    #[error("Resolution failed: too many hops ({hops})")]
    TooManyHops { hops: u8 },

    #[error("Failed to encode DNS message: {0}")]
    EncodeFailure(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors caused by the upstream exchange itself rather than by the
    /// content of a reply.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamTimeout { .. } | DomainError::UpstreamUnreachable { .. }
        )
    }

    /// Short status label used in log lines.
    pub fn status(&self) -> &'static str {
        match self {
            DomainError::MalformedPacket(_) | DomainError::NoQuestion => "FORMERR",
            DomainError::UpstreamTimeout { .. } => "TIMEOUT",
            DomainError::UpstreamUnreachable { .. }
            | DomainError::InvalidUpstreamResponse { .. } => "UPSTREAM_ERROR",
            DomainError::DeadEnd => "DEAD_END",
            DomainError::TooManyHops { .. } => "TOO_MANY_HOPS",
            _ => "SERVFAIL",
        }
    }
}
