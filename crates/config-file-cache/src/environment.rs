//! User-data path resolution from the environment

use crate::cache::ConfigurationCache;
use std::env;
use std::path::PathBuf;

/// Host environment the cache stores its files under
#[derive(Debug, Clone)]
pub struct CacheEnvironment {
    pub user_data_dir: PathBuf,
}

impl CacheEnvironment {
    /// Resolve the user-data directory from `USER_DATA_DIR`
    pub fn from_env() -> Self {
        let user_data_dir = env::var("USER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./user-data"));

        Self { user_data_dir }
    }

    /// Build a configuration cache rooted under this environment
    pub fn cache(&self) -> ConfigurationCache {
        ConfigurationCache::new(self.user_data_dir.clone())
    }
}
