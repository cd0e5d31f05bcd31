//! The `Driver` and `Cursor` traits.

use super::failure::FailureKind;
use super::isolation::IsolationLevel;

/// A cursor handle returned alongside a new connection.
///
/// The connection layer only needs one knob: the number of rows fetched per
/// batch. Query execution against the cursor belongs to the storage engine
/// above this layer.
pub trait Cursor {
    /// Set the number of rows fetched per batch.
    fn set_batch_rows(&mut self, rows: usize);

    /// The configured batch size.
    fn batch_rows(&self) -> usize;
}

/// A database driver binding.
///
/// Implementations own socket establishment, authentication, and the
/// mapping from semantic isolation levels to native tokens. The connection
/// layer drives them through this trait and never inspects their errors
/// beyond `classify`.
pub trait Driver {
    /// Open connection handle.
    type Conn;
    /// Cursor handle paired with the connection.
    type Cursor: Cursor;
    /// The binding's native error type. Propagated to callers unchanged.
    type Error: std::error::Error + 'static;

    /// Open a connection and cursor against `dsn` under `isolation`.
    fn connect_with_isolation(
        &self,
        isolation: IsolationLevel,
        dsn: &str,
    ) -> Result<(Self::Conn, Self::Cursor), Self::Error>;

    /// Classify a native error. Must be pure: the same error always maps
    /// to the same kind.
    fn classify(&self, error: &Self::Error) -> FailureKind;
}
