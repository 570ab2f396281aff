mod cache;
mod errors;
mod local_records;
mod logging;
mod resolver;
mod root;
mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use local_records::LocalRecordsConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
