//! File-backed configuration caching with memoized per-key handles

use crate::error::Result;
use crate::types::{CacheStats, ConfigurationKey};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Subdirectory of the user-data directory holding all cached configurations
const CACHE_DIR_NAME: &str = "CachedConfigurations";

/// Handle for one cached configuration blob on disk
///
/// Owns the directory `<root>/<type>/<key>` and the blob file inside it.
/// Neither exists until the first successful `write`.
pub struct CachedConfiguration {
    cache_dir: PathBuf,
    cache_file: PathBuf,
}

impl CachedConfiguration {
    pub fn new(cache_root: &Path, key: &ConfigurationKey) -> Self {
        let cache_dir = cache_root.join(&key.key_type).join(&key.key);
        let cache_file = cache_dir.join(key.file_name());
        Self {
            cache_dir,
            cache_file,
        }
    }

    /// Read the cached blob, or an empty string if the file is missing or
    /// unreadable
    ///
    /// Callers cannot distinguish "never written" from "read failed"; the
    /// cache is best-effort and the value is recomputable upstream.
    pub async fn read(&self) -> String {
        match fs::read_to_string(&self.cache_file).await {
            Ok(content) => content,
            Err(e) => {
                debug!(path = ?self.cache_file, error = %e, "Failed to read cached configuration, returning empty");
                String::new()
            }
        }
    }

    /// Overwrite the cached blob with `content`
    ///
    /// If the key directory cannot be created the write is dropped without
    /// error; a failure of the file overwrite itself propagates.
    pub async fn write(&self, content: &str) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.cache_dir).await {
            warn!(path = ?self.cache_dir, error = %e, "Failed to create cache directory, dropping write");
            return Ok(());
        }

        fs::write(&self.cache_file, content).await?;
        debug!(path = ?self.cache_file, size = content.len(), "Wrote cached configuration");
        Ok(())
    }

    /// Recursively delete the key's directory
    ///
    /// Removing a never-written key is a no-op success.
    pub async fn remove(&self) -> Result<()> {
        match fs::remove_dir_all(&self.cache_dir).await {
            Ok(()) => {
                debug!(path = ?self.cache_dir, "Removed cached configuration");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path of the blob file this handle manages
    pub fn path(&self) -> &Path {
        &self.cache_file
    }
}

/// Keyed cache of configuration blobs under a common root directory
///
/// Per-key handles are created lazily on first access and retained for the
/// process lifetime; there is no eviction and no size bound. Concurrent
/// writes to the same key are last-writer-wins.
pub struct ConfigurationCache {
    /// `<user data dir>/CachedConfigurations`
    cache_root: PathBuf,
    /// Memoized per-key handles, keyed by the composite `type:key` string
    handles: Arc<RwLock<HashMap<String, Arc<CachedConfiguration>>>>,
}

impl ConfigurationCache {
    /// Create a cache rooted under the given user-data directory
    pub fn new(user_data_dir: PathBuf) -> Self {
        Self {
            cache_root: user_data_dir.join(CACHE_DIR_NAME),
            handles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get or lazily create the handle for `key`
    async fn handle(&self, key: &ConfigurationKey) -> Arc<CachedConfiguration> {
        let composite = key.composite();

        {
            let handles = self.handles.read().await;
            if let Some(handle) = handles.get(&composite) {
                return handle.clone();
            }
        }

        let mut handles = self.handles.write().await;
        handles
            .entry(composite)
            .or_insert_with(|| Arc::new(CachedConfiguration::new(&self.cache_root, key)))
            .clone()
    }

    /// Read the blob stored for `key`, or an empty string
    pub async fn read(&self, key: &ConfigurationKey) -> String {
        self.handle(key).await.read().await
    }

    /// Overwrite the blob stored for `key` with `content`
    pub async fn write(&self, key: &ConfigurationKey, content: &str) -> Result<()> {
        self.handle(key).await.write(content).await
    }

    /// Delete the blob stored for `key`
    pub async fn remove(&self, key: &ConfigurationKey) -> Result<()> {
        self.handle(key).await.remove().await
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        let handles = self.handles.read().await;
        CacheStats {
            handles: handles.len(),
        }
    }
}
