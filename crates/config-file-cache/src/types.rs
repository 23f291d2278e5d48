//! Cache types

use serde::{Deserialize, Serialize};

/// Namespace whose entries store workspace configuration
const WORKSPACES_TYPE: &str = "workspaces";

/// Identifies one cached configuration blob as a `(type, key)` pair
///
/// `key_type` is a namespace (e.g. `"workspaces"`, `"folders"`) and `key` is
/// an opaque identifier within it. The pair is used only to derive a
/// filesystem path; no validation is applied beyond path-join semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationKey {
    pub key_type: String,
    pub key: String,
}

impl ConfigurationKey {
    pub fn new(key_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key_type: key_type.into(),
            key: key.into(),
        }
    }

    /// Composite string used as the in-memory handle map key
    pub fn composite(&self) -> String {
        format!("{}:{}", self.key_type, self.key)
    }

    /// Name of the file the blob is stored in, within the key's directory
    pub fn file_name(&self) -> &'static str {
        if self.key_type == WORKSPACES_TYPE {
            "workspace.json"
        } else {
            "configuration.json"
        }
    }
}

/// Statistics about the cache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of per-key handles memoized since process start
    pub handles: usize,
}
