use arc_swap::ArcSwap;
use ferrous_recursor_application::ports::LocalRecordsPort;
use ferrous_recursor_domain::{normalize_domain, DomainError};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

type RecordMap = HashMap<Arc<str>, Ipv4Addr>;

/// Static name -> IPv4 overrides, loaded from a JSON object such as
/// `{"myapp.local.": "10.0.0.5"}`.
///
/// The map is swapped as a whole on reload, so readers see either the old
/// table or the new one.
pub struct LocalRecordTable {
    records: ArcSwap<RecordMap>,
}

impl LocalRecordTable {
    pub fn empty() -> Self {
        Self {
            records: ArcSwap::from_pointee(RecordMap::new()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let table = Self::empty();
        table.records.store(Arc::new(parse_records(json)?));
        Ok(table)
    }

    /// Loads the table from `path`, replacing the current contents.
    /// On error the current contents are left untouched.
    pub fn load_from_file(&self, path: &Path) -> Result<usize, DomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to read local records {}: {}",
                path.display(),
                e
            ))
        })?;
        let records = parse_records(&raw)?;
        let count = records.len();
        self.records.store(Arc::new(records));

        info!(path = %path.display(), records = count, "Local records loaded");
        Ok(count)
    }

    /// Like [`load_from_file`](Self::load_from_file), but a failure is only
    /// logged and the previous table stays in service.
    pub fn reload(&self, path: &Path) -> usize {
        match self.load_from_file(path) {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Local records not reloaded, keeping previous table"
                );
                self.len()
            }
        }
    }
}

impl Default for LocalRecordTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl LocalRecordsPort for LocalRecordTable {
    fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        self.records.load().get(name).copied()
    }

    fn len(&self) -> usize {
        self.records.load().len()
    }
}

fn parse_records(json: &str) -> Result<RecordMap, DomainError> {
    let raw: HashMap<String, String> = serde_json::from_str(json)
        .map_err(|e| DomainError::ConfigError(format!("Invalid local records JSON: {}", e)))?;

    let mut records = RecordMap::with_capacity(raw.len());
    for (name, value) in raw {
        match value.trim().parse::<Ipv4Addr>() {
            Ok(addr) => {
                records.insert(Arc::from(normalize_domain(&name)), addr);
            }
            Err(_) => {
                let error = DomainError::InvalidIpAddress(value);
                warn!(domain = %name, error = %error, "Skipping local record");
            }
        }
    }
    Ok(records)
}
