//! Cache module for memoizing user lookups
//!
//! This module provides the [`UserStore`], which normalizes fetched payloads
//! into records and keeps them in a [`RecordCache`] so each key is fetched at
//! most once per process. The default [`MemoryCache`] is unbounded and has no
//! expiry.

mod memory;
mod store;

pub use memory::{MemoryCache, RecordCache};
pub use store::UserStore;
