//! Query cache keyed by ordered string lists.
//!
//! Plain data only; the reactive layer in `backend.rs` keeps one `QueryCache`
//! inside a signal and drives fetches from it.

use crate::error::ApiError;
use leptos::logging::log;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for QueryKey {
    fn from(part: &str) -> Self {
        Self::new([part])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CacheEntry {
    pub data: Option<Value>,
    pub error: Option<ApiError>,
    pub in_flight: bool,
    pub stale: bool,
    /// Bumped on every fetch start and invalidation.
    pub generation: u64,
}

impl CacheEntry {
    pub fn is_loading(&self) -> bool {
        self.in_flight && self.data.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn entry(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// True when there is nothing fresh for `key` and nobody is fetching it.
    pub fn should_fetch(&self, key: &QueryKey) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => entry.stale && !entry.in_flight,
        }
    }

    /// Claims the fetch for `key`. `None` means another caller already owns it.
    pub fn start_fetch(&mut self, key: &QueryKey) -> Option<u64> {
        if !self.should_fetch(key) {
            return None;
        }
        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = true;
        entry.stale = false;
        entry.generation += 1;
        Some(entry.generation)
    }

    /// Stores the outcome of a fetch. The last completion wins; a failure
    /// keeps the previous data so a table does not blank out on a flaky call.
    pub fn finish_fetch(&mut self, key: &QueryKey, generation: u64, result: Result<Option<Value>, ApiError>) {
        let entry = self.entries.entry(key.clone()).or_default();
        if generation == entry.generation {
            entry.in_flight = false;
        }
        match result {
            Ok(data) => {
                entry.data = data;
                entry.error = None;
            }
            Err(err) => {
                entry.error = Some(err);
            }
        }
    }

    /// Marks `key` stale. Returns false if nothing was cached for it yet.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                log!("[CACHE] Invalidating {}", key);
                entry.stale = true;
                entry.in_flight = false;
                entry.generation += 1;
                true
            }
            None => false,
        }
    }

    pub fn invalidate_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a QueryKey>) -> usize {
        keys.into_iter().filter(|key| self.invalidate(key)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
