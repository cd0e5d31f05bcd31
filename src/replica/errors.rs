//! Replica address errors.
//!
//! A malformed candidate is a configuration defect: it is reported where
//! the text is parsed and never retried.

use thiserror::Error;

/// Failure to parse a `host` or `host:port` candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicaAddressError {
    /// The host component is empty.
    #[error("replica address {0:?} has an empty host")]
    EmptyHost(String),

    /// More than one `:` separator.
    #[error("replica address {0:?} has more than one ':' separator")]
    TooManySeparators(String),

    /// The port component is not a valid TCP port.
    #[error("replica address {addr:?} has an invalid port {port:?}")]
    InvalidPort { addr: String, port: String },
}
