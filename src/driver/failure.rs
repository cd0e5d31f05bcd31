//! Driver error classification.

/// How a driver binding classifies one of its native errors.
///
/// The failover loop branches only on `ReplicaUnreachable`. `Disconnected`
/// and `Close` are carried for the layers that own session teardown and
/// reuse; everything the binding cannot place is `Other` and always fatal
/// at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The targeted endpoint could not be reached. Recoverable by trying
    /// the next replica candidate.
    ReplicaUnreachable,
    /// An established connection was lost.
    Disconnected,
    /// Failure while closing a connection.
    Close,
    /// Anything else. Never retried.
    Other,
}

impl FailureKind {
    /// Whether the failover loop may retry with another candidate.
    pub fn is_replica_unreachable(&self) -> bool {
        matches!(self, FailureKind::ReplicaUnreachable)
    }

    /// Whether this failure means the connection is gone.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            FailureKind::ReplicaUnreachable | FailureKind::Disconnected
        )
    }
}
