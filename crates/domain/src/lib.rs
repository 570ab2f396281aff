//! Ferrous Recursor Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{normalize_domain, DnsQuery, CLASS_IN};
pub use dns_record::RecordType;
pub use errors::DomainError;
