use hickory_proto::op::Message;

/// Port for the response cache shared by all in-flight queries.
///
/// Keys are normalized query names. `lookup` and `store` are each atomic;
/// there is no transaction spanning both.
pub trait ResponseCachePort: Send + Sync {
    /// Returns a copy of the cached message if it has not expired.
    /// An expired entry is removed by the lookup that finds it.
    fn lookup(&self, name: &str) -> Option<Message>;

    /// Inserts or replaces the entry for `name` and returns the TTL applied.
    fn store(&self, name: &str, message: &Message) -> u32;
}
