mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use dashmap::DashMap;
use ferrous_recursor_application::ports::ResponseCachePort;
use hickory_proto::op::Message;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// TTL applied to messages that carry no answer record.
pub const DEFAULT_CACHE_TTL: u32 = 60;

struct CacheEntry {
    message: Message,
    expires_at: Instant,
}

/// Whole-message response cache keyed by normalized query name.
///
/// Expiry is lazy: an expired entry stays in the map until a lookup for the
/// same name finds and removes it.
pub struct ResponseCache {
    entries: DashMap<Arc<str>, CacheEntry, FxBuildHasher>,
    clock: Arc<dyn Clock>,
    default_ttl: u32,
}

impl ResponseCache {
    pub fn new(default_ttl: u32) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(default_ttl: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            clock,
            default_ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    fn ttl_for(&self, message: &Message) -> u32 {
        message
            .answers()
            .first()
            .map(|record| record.ttl())
            .unwrap_or(self.default_ttl)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl ResponseCachePort for ResponseCache {
    fn lookup(&self, name: &str) -> Option<Message> {
        let now = self.clock.now();

        match self.entries.get(name) {
            None => return None,
            Some(entry) if now < entry.expires_at => {
                debug!(domain = name, "Cache entry found");
                return Some(entry.message.clone());
            }
            Some(_) => {}
        }

        // A concurrent store may have refreshed the entry since the read above.
        if self
            .entries
            .remove_if(name, |_, entry| now >= entry.expires_at)
            .is_some()
        {
            debug!(domain = name, "Cache entry expired");
        }
        None
    }

    fn store(&self, name: &str, message: &Message) -> u32 {
        let ttl = self.ttl_for(message);
        let now = self.clock.now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::from(ttl)))
            .unwrap_or(now);

        debug!("Caching {} for {} seconds", name, ttl);

        self.entries.insert(
            Arc::from(name),
            CacheEntry {
                message: message.clone(),
                expires_at,
            },
        );
        ttl
    }
}
