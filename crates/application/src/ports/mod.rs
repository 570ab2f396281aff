mod local_records;
mod recursive_resolver;
mod response_cache;

pub use local_records::LocalRecordsPort;
pub use recursive_resolver::RecursiveResolver;
pub use response_cache::ResponseCachePort;

// Re-export for convenience
pub use ferrous_recursor_domain::DnsQuery;
