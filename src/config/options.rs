//! Store options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::driver::IsolationLevel;

use super::errors::{ConfigError, ConfigResult};

/// Options for the connection layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Base connection descriptor (`key=value` form). Required.
    pub dsn: String,

    /// Whether the storage engine above keeps object history. Passed
    /// through untouched; session acquisition does not depend on it.
    #[serde(default = "default_keep_history")]
    pub keep_history: bool,

    /// Replica list file for general-purpose routing.
    #[serde(default)]
    pub replica_conf: Option<PathBuf>,

    /// Replica list file for read-only ("load") routing.
    #[serde(default)]
    pub ro_replica_conf: Option<PathBuf>,

    /// Isolation level for store sessions. `None` keeps the default
    /// (read committed, one snapshot per statement).
    #[serde(default)]
    pub store_isolation: Option<IsolationLevel>,
}

fn default_keep_history() -> bool {
    true
}

impl StoreOptions {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            keep_history: default_keep_history(),
            replica_conf: None,
            ro_replica_conf: None,
            store_isolation: None,
        }
    }

    /// Parse options from a JSON document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Validate the options.
    ///
    /// The DSN must be non-blank, and any configured replica list path
    /// must be non-blank. Whether the files exist is checked at load time.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.dsn.trim().is_empty() {
            return Err(ConfigError::MissingDsn);
        }
        if let Some(path) = &self.replica_conf {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyReplicaPath {
                    field: "replica_conf",
                });
            }
        }
        if let Some(path) = &self.ro_replica_conf {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyReplicaPath {
                    field: "ro_replica_conf",
                });
            }
        }
        Ok(())
    }
}
