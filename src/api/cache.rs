//! Tag-invalidated query cache
//!
//! Successful query results are retained per (path, parameters) key for a
//! freshness window and served without a network round trip. Each entry
//! carries the resource tags it represents; mutations invalidate tags,
//! evicting every entry that carries one, so the next read refetches.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::api::envelope::Payload;

/// Resource families used for cache invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTag {
    User,
    Salon,
    Reseller,
    License,
    Dashboard,
    BusinessCategory,
    Subscription,
    Activity,
}

/// Canonical cache key for one query: path plus sorted query parameters.
pub fn query_key(path: &str, params: &[(String, String)]) -> String {
    let mut params: Vec<_> = params.to_vec();
    params.sort();
    let mut key = path.to_string();
    for (name, value) in params {
        key.push('&');
        key.push_str(&name);
        key.push('=');
        key.push_str(&value);
    }
    key
}

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Payload,
    tags: Vec<ResourceTag>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}

/// Shared response cache for query endpoints.
#[derive(Debug)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Fresh cached payload for `key`, if any. Expired entries are evicted
    /// on the way out.
    pub fn get(&self, key: &str) -> Option<Payload> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(self.ttl) => {
                    return Some(entry.payload.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: take the write lock only when there is something to drop.
        self.entries.write().remove(key);
        None
    }

    pub fn insert(&self, key: String, payload: Payload, tags: &[ResourceTag]) {
        self.entries.write().insert(
            key,
            CacheEntry {
                payload,
                tags: tags.to_vec(),
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop every entry carrying any of `tags`.
    pub fn invalidate(&self, tags: &[ResourceTag]) {
        if tags.is_empty() {
            return;
        }
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|tag| tags.contains(tag)));
        let evicted = before - entries.len();
        if evicted > 0 {
            debug!(?tags, evicted, "invalidated cached queries");
        }
    }

    /// Drop a single query's entry so the next read refetches.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Network came back: everything cached is suspect, revalidate it all.
    pub fn on_reconnect(&self) {
        self.clear();
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
