use std::net::Ipv4Addr;

/// Read side of the local override table.
pub trait LocalRecordsPort: Send + Sync {
    /// Looks up a normalized (lower-case, dot-terminated) name.
    fn lookup(&self, name: &str) -> Option<Ipv4Addr>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
