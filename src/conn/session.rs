//! Open session values.

use crate::replica::ReplicaAddress;

/// An open (connection, cursor) pair.
///
/// The replica the session was opened against is embedded at construction;
/// `None` means the session went to the primary with no replica routing.
/// Ownership transfers fully to the caller: the manager keeps no reference,
/// and commit/close belong to the layers above.
#[derive(Debug)]
pub struct Session<C, K> {
    conn: C,
    cursor: K,
    replica: Option<ReplicaAddress>,
}

impl<C, K> Session<C, K> {
    pub(crate) fn new(conn: C, cursor: K, replica: Option<ReplicaAddress>) -> Self {
        Self {
            conn,
            cursor,
            replica,
        }
    }

    pub fn conn(&self) -> &C {
        &self.conn
    }

    pub fn conn_mut(&mut self) -> &mut C {
        &mut self.conn
    }

    pub fn cursor(&self) -> &K {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut K {
        &mut self.cursor
    }

    /// The replica this session was opened against, if any.
    pub fn replica(&self) -> Option<&ReplicaAddress> {
        self.replica.as_ref()
    }

    pub fn into_parts(self) -> (C, K, Option<ReplicaAddress>) {
        (self.conn, self.cursor, self.replica)
    }
}
