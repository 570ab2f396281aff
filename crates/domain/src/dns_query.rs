use super::RecordType;
use std::sync::Arc;

/// The `IN` (Internet) DNS class.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub class: u16,
}

impl DnsQuery {
    /// Builds an `IN` class query. The domain is normalized, see [`normalize_domain`].
    pub fn new(domain: impl AsRef<str>, record_type: RecordType) -> Self {
        Self {
            domain: Arc::from(normalize_domain(domain.as_ref())),
            record_type,
            class: CLASS_IN,
        }
    }

    pub fn with_class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn is_address_query(&self) -> bool {
        self.record_type == RecordType::A
    }
}

/// Lower-cases a domain name and makes it dot-terminated.
///
/// `"Example.COM"` and `"example.com."` both become `"example.com."`; the
/// empty name becomes the root `"."`.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let mut normalized = trimmed.to_ascii_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}
