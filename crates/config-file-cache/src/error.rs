//! Error types for the configuration file cache

use std::fmt;

#[derive(Debug)]
pub enum ConfigCacheError {
    Io(Box<std::io::Error>),
}

impl fmt::Display for ConfigCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigCacheError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ConfigCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigCacheError::Io(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for ConfigCacheError {
    fn from(err: std::io::Error) -> Self {
        ConfigCacheError::Io(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ConfigCacheError>;
