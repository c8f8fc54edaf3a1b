//! Memoizing user lookup

use std::sync::Arc;

use tracing::debug;

use super::{MemoryCache, RecordCache};
use crate::data::Record;
use crate::fetch::{FetchError, Fetcher, Transport};

/// Looks up users through a [`Fetcher`] and caches the normalized records
///
/// `get` takes `&mut self`, so there is a single writer and the same key is
/// never fetched twice concurrently.
#[derive(Debug)]
pub struct UserStore<T, C = MemoryCache> {
    fetcher: Fetcher<T>,
    cache: C,
}

impl<T: Transport> UserStore<T> {
    /// Creates a store with an empty in-memory cache
    pub fn new(fetcher: Fetcher<T>) -> Self {
        Self::with_cache(fetcher, MemoryCache::new())
    }
}

impl<T: Transport, C: RecordCache> UserStore<T, C> {
    /// Creates a store over custom cache storage
    pub fn with_cache(fetcher: Fetcher<T>, cache: C) -> Self {
        Self { fetcher, cache }
    }

    /// Returns the record for `key`, fetching it on a cache miss
    ///
    /// The key is percent-encoded into a single path segment, so `/`, `?` or
    /// `#` in a key cannot address a different resource.
    ///
    /// # Returns
    /// * `Ok(Arc<Record>)` - Cached record, or the freshly normalized one
    /// * `Err(FetchError)` - If the fetch failed; nothing is cached
    pub async fn get(&mut self, key: &str) -> Result<Arc<Record>, FetchError> {
        if let Some(record) = self.cache.get(key) {
            debug!(key, "cache hit");
            return Ok(record);
        }

        debug!(key, "cache miss");
        let payload = self.fetcher.fetch(&user_endpoint(key), None).await?;
        let record = Arc::new(Record::from_payload(&payload));
        self.cache.insert(key.to_string(), Arc::clone(&record));

        Ok(record)
    }

    /// Whether a record for `key` is already cached
    pub fn contains(&self, key: &str) -> bool {
        self.cache.get(key).is_some()
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the underlying fetcher
    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }
}

/// Endpoint for a user key, encoded as one path segment
fn user_endpoint(key: &str) -> String {
    format!("users/{}", urlencoding::encode(key))
}
