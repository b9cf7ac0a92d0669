//! In-memory cache for the employee roster
//!
//! Provides a `RosterCache` holding one snapshot of the roster with a validity
//! window. Readers share the snapshot under a read lock; a write replaces the
//! whole snapshot under the write lock, so readers see either the old or the
//! new roster, never a mix.

use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::data::Employee;

/// Default validity window for a cached roster
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A stored roster snapshot
#[derive(Debug)]
struct CacheEntry {
    /// The cached roster
    data: Arc<Vec<Employee>>,
    /// Wall-clock time the roster was stored
    cached_at: DateTime<Utc>,
    /// Monotonic time the roster was stored, used for expiry
    stored_at: Instant,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug, Clone)]
pub struct CachedData {
    /// The cached roster
    pub data: Arc<Vec<Employee>>,
    /// When the roster was stored
    pub cached_at: DateTime<Utc>,
    /// Whether the validity window has elapsed
    pub is_expired: bool,
}

/// Time-bounded store of the last fetched roster
///
/// The cache holds a single entry. It is empty until the first write, valid
/// while the entry is younger than the TTL, and expired afterwards until the
/// next write replaces it.
#[derive(Debug)]
pub struct RosterCache {
    entry: RwLock<Option<CacheEntry>>,
    ttl: Duration,
}

impl RosterCache {
    /// Creates an empty cache with the given validity window
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Reads the stored snapshot, fresh or not
    ///
    /// Returns `None` only if nothing has been written yet.
    pub fn read(&self) -> Option<CachedData> {
        // The entry is only ever replaced whole, so a poisoned lock still
        // guards a consistent value.
        let guard = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|entry| CachedData {
            data: Arc::clone(&entry.data),
            cached_at: entry.cached_at,
            is_expired: entry.stored_at.elapsed() >= self.ttl,
        })
    }

    /// Returns the snapshot if it is non-empty and within the validity window
    ///
    /// Any other state (empty, expired, or an empty roster) is a miss.
    pub fn fresh(&self) -> Option<Arc<Vec<Employee>>> {
        self.read()
            .filter(|cached| !cached.is_expired && !cached.data.is_empty())
            .map(|cached| cached.data)
    }

    /// Replaces the stored snapshot and resets its timestamp
    pub fn write(&self, employees: Vec<Employee>) -> Arc<Vec<Employee>> {
        let data = Arc::new(employees);
        let entry = CacheEntry {
            data: Arc::clone(&data),
            cached_at: Utc::now(),
            stored_at: Instant::now(),
        };

        let mut guard = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(entry);
        data
    }
}

impl Default for RosterCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn roster(names: &[&str]) -> Vec<Employee> {
        names
            .iter()
            .map(|name| Employee::new(*name, "Self-only", 2000, "1990-01-01"))
            .collect()
    }

    #[test]
    fn test_read_returns_none_when_empty() {
        let cache = RosterCache::default();

        assert!(cache.read().is_none());
        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_write_then_read_returns_written_snapshot() {
        let cache = RosterCache::default();
        let data = roster(&["alice", "bob"]);

        cache.write(data.clone());

        let cached = cache.fresh().expect("Should be a cache hit");
        assert_eq!(*cached, data);
        assert!(!cache.read().unwrap().is_expired);
    }

    #[test]
    fn test_read_after_ttl_is_a_miss() {
        let cache = RosterCache::new(Duration::from_millis(5));
        cache.write(roster(&["alice"]));

        thread::sleep(Duration::from_millis(20));

        assert!(cache.fresh().is_none(), "Expired cache should miss");
        let cached = cache.read().expect("Expired entry is still readable");
        assert!(cached.is_expired);
        assert_eq!(cached.data.len(), 1);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = RosterCache::new(Duration::ZERO);
        cache.write(roster(&["alice"]));

        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_empty_roster_is_a_miss() {
        let cache = RosterCache::default();
        cache.write(Vec::new());

        assert!(cache.fresh().is_none());
        assert!(cache.read().is_some());
    }

    #[test]
    fn test_write_replaces_whole_snapshot() {
        let cache = RosterCache::default();
        cache.write(roster(&["alice", "bob", "carol"]));
        cache.write(roster(&["dave"]));

        let cached = cache.fresh().unwrap();
        assert_eq!(*cached, roster(&["dave"]));
    }

    #[test]
    fn test_write_resets_expiry() {
        let cache = RosterCache::new(Duration::from_millis(50));
        cache.write(roster(&["alice"]));
        thread::sleep(Duration::from_millis(80));
        assert!(cache.fresh().is_none());

        cache.write(roster(&["bob"]));
        assert_eq!(cache.fresh().unwrap()[0].name, "bob");
    }

    #[test]
    fn test_cached_at_timestamp_is_recorded() {
        let cache = RosterCache::default();

        let before = Utc::now();
        cache.write(roster(&["alice"]));
        let after = Utc::now();

        let cached = cache.read().unwrap();
        assert!(cached.cached_at >= before);
        assert!(cached.cached_at <= after);
    }

    #[test]
    fn test_readers_never_observe_partial_snapshot() {
        let cache = Arc::new(RosterCache::default());
        let small = roster(&["a"]);
        let large = roster(&["b", "c", "d", "e"]);
        cache.write(small.clone());

        let writer = {
            let cache = Arc::clone(&cache);
            let (small, large) = (small.clone(), large.clone());
            thread::spawn(move || {
                for i in 0..200 {
                    cache.write(if i % 2 == 0 { large.clone() } else { small.clone() });
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let (small, large) = (small.clone(), large.clone());
                thread::spawn(move || {
                    for _ in 0..200 {
                        let snapshot = cache.fresh().unwrap();
                        assert!(*snapshot == small || *snapshot == large);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
