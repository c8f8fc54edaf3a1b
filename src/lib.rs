//! userfetch library
//!
//! Fetches user records from the user API with bounded retries and memoizes
//! the normalized records in memory.

pub mod cache;
pub mod cli;
pub mod data;
pub mod fetch;

pub use cache::{MemoryCache, RecordCache, UserStore};
pub use data::Record;
pub use fetch::{AttemptError, FetchConfig, FetchError, Fetcher, HttpTransport, Transport};
