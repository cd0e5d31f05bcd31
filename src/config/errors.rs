//! Configuration error types.

use thiserror::Error;

use crate::replica::ReplicaAddressError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration and replica-list loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base DSN is missing or blank
    #[error("dsn must not be empty")]
    MissingDsn,

    /// A replica list path was configured but is blank
    #[error("{field} must name a file")]
    EmptyReplicaPath { field: &'static str },

    /// A replica list file could not be read
    #[error("failed to read replica list {path}: {source}")]
    ReplicaFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A replica list file contained a malformed address
    #[error("{path}:{line}: {source}")]
    ReplicaAddress {
        path: String,
        line: usize,
        #[source]
        source: ReplicaAddressError,
    },

    /// A replica list file contained no addresses
    #[error("replica list {path} is empty")]
    EmptyReplicaList { path: String },
}
