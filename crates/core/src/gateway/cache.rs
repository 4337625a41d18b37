use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Time-boxed response cache: reuse a recent value instead of re-issuing the
/// upstream call. One fixed revalidation window for every entry, keyed by the
/// request URL — no eviction, no per-key differentiation.
#[derive(Debug)]
pub struct TtlCache<V> {
    ttl: Duration,
    entries: HashMap<String, (Instant, V)>,
}

impl<V: Clone> TtlCache<V> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// A clone of the cached value, if one was stored within the window.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let (stored_at, value) = self.entries.get(key)?;
        if stored_at.elapsed() < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    /// Store a value, resetting the window for its key.
    /// Expired entries are simply overwritten when their key recurs.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), (Instant::now(), value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
