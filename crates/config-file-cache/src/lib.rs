//! Best-effort file-backed cache for configuration blobs
//!
//! Stores UTF-8 configuration text on disk in a directory per `(type, key)`
//! pair, with lazily-created per-key handles memoized for the process
//! lifetime. Reads never fail: a missing or unreadable file is reported as
//! an empty string, because the cached value can always be recomputed from
//! its authoritative source.

mod cache;
mod environment;
mod error;
mod types;

pub use cache::{CachedConfiguration, ConfigurationCache};
pub use environment::CacheEnvironment;
pub use error::{ConfigCacheError, Result};
pub use types::{CacheStats, ConfigurationKey};
