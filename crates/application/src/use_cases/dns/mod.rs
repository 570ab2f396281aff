mod handle_dns_query;

pub use handle_dns_query::{HandleDnsQueryUseCase, DEFAULT_LOCAL_RECORD_TTL};
