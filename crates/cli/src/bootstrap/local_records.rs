use ferrous_recursor_application::ports::LocalRecordsPort;
use ferrous_recursor_domain::config::LocalRecordsConfig;
use ferrous_recursor_infrastructure::dns::LocalRecordTable;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Loads the override table. A missing or broken file leaves the table empty.
pub fn load_local_records(config: &LocalRecordsConfig) -> Arc<LocalRecordTable> {
    let table = Arc::new(LocalRecordTable::empty());

    match table.load_from_file(Path::new(&config.path)) {
        Ok(_) => info!(
            path = %config.path,
            ttl = config.ttl,
            records = table.len(),
            "Local override table ready"
        ),
        Err(e) => warn!(
            path = %config.path,
            error = %e,
            "Local records unavailable, starting with an empty table"
        ),
    }

    table
}
