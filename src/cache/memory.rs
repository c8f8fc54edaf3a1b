//! Storage backing the user store

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::Record;

/// Key/record storage used by [`UserStore`](super::UserStore)
pub trait RecordCache {
    /// Returns the record stored under `key`, if any
    fn get(&self, key: &str) -> Option<Arc<Record>>;

    /// Stores `record` under `key`, replacing any previous entry
    fn insert(&mut self, key: String, record: Arc<Record>);

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-memory cache that lives as long as its owner
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<String, Arc<Record>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<Record>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: String, record: Arc<Record>) {
        self.entries.insert(key, record);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
