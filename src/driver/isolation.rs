//! Semantic isolation levels.
//!
//! Callers request sessions by semantic level, never by raw driver token.
//! Each driver binding maps these to whatever its database expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transaction isolation level for a new session.
///
/// `RepeatableRead` exists for write sessions that want one MVCC snapshot
/// per transaction instead of one per statement; load sessions use
/// `Serializable` and everything else defaults to `ReadCommitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    /// Snapshot per statement.
    ReadCommitted,
    /// Snapshot per transaction.
    RepeatableRead,
    /// Full serializability.
    Serializable,
}

impl IsolationLevel {
    /// The SQL keyword form of this level.
    pub fn as_sql(&self) -> &'static str {
        match self {
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::Serializable => "SERIALIZABLE",
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_keywords() {
        assert_eq!(IsolationLevel::ReadCommitted.as_sql(), "READ COMMITTED");
        assert_eq!(IsolationLevel::RepeatableRead.as_sql(), "REPEATABLE READ");
        assert_eq!(IsolationLevel::Serializable.as_sql(), "SERIALIZABLE");
    }

    #[test]
    fn test_serde_snake_case() {
        let level: IsolationLevel = serde_json::from_str("\"repeatable_read\"").unwrap();
        assert_eq!(level, IsolationLevel::RepeatableRead);
        assert_eq!(
            serde_json::to_string(&IsolationLevel::Serializable).unwrap(),
            "\"serializable\""
        );
    }
}
