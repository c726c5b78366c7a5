//! Query canonicalization and the TTL-bounded result cache.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::news::Article;

/// Canonical cache identity for a retrieval request.
///
/// Two requests asking for the same symbols in a different order, with
/// different casing, or with repeated entries are the same query and must
/// map to the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    /// Builds the key for a symbol set plus pagination. Symbols are trimmed,
    /// upper-cased, deduplicated, and sorted before joining; blank entries
    /// are ignored.
    pub fn new<I, S>(symbols: I, page: u32, limit: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_canonical(&canonical_symbols(symbols), page, limit)
    }

    /// Key for a symbol list that is already canonical.
    pub(crate) fn from_canonical(symbols: &[String], page: u32, limit: u32) -> Self {
        Self(format!("news:{}:{page}:{limit}", symbols.join(",")))
    }

    /// The canonical string form of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a symbol list: trim, uppercase, drop blanks, sort, dedup.
pub(crate) fn canonical_symbols<I, S>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = symbols
        .into_iter()
        .map(|s| s.as_ref().trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[derive(Debug)]
struct CacheEntry {
    articles: Vec<Article>,
    stored_at: Instant,
}

/// In-memory TTL cache from [`QueryKey`] to a normalized result set.
///
/// Entries expire lazily: an entry at or past its TTL reports a miss on
/// read and is only physically removed when an insert needs the room.
/// The store is bounded by `max_entries`; when full, the entry with the
/// oldest `stored_at` is evicted. Reads and writes go through an async
/// `RwLock`, so concurrent lookups share and a writer waits its turn.
#[derive(Debug)]
pub(crate) struct CacheStore {
    map: RwLock<HashMap<QueryKey, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl CacheStore {
    pub(crate) fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the cached articles if the entry exists and is still fresh.
    pub(crate) async fn get(&self, key: &QueryKey) -> Option<Vec<Article>> {
        let guard = self.map.read().await;
        let entry = guard.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.articles.clone())
        } else {
            None
        }
    }

    /// Stores a result set, replacing any prior entry for the key wholesale.
    pub(crate) async fn put(&self, key: QueryKey, articles: Vec<Article>) {
        let mut guard = self.map.write().await;
        if !guard.contains_key(&key) && guard.len() >= self.max_entries {
            guard.retain(|_, e| e.stored_at.elapsed() < self.ttl);
            if guard.len() >= self.max_entries {
                let oldest = guard
                    .iter()
                    .min_by_key(|(_, e)| e.stored_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    guard.remove(&oldest);
                }
            }
        }
        guard.insert(
            key,
            CacheEntry {
                articles,
                stored_at: Instant::now(),
            },
        );
    }

    /// Removes the entry for the key immediately, regardless of TTL.
    pub(crate) async fn invalidate(&self, key: &QueryKey) {
        self.map.write().await.remove(key);
    }
}
