//! Driver Binding Seam
//!
//! The connection layer never talks to a database library directly. A
//! driver binding supplies three things:
//!
//! - `connect_with_isolation`: open a (connection, cursor) pair against a
//!   connection descriptor under a semantic isolation level
//! - `classify`: partition the binding's native errors into the failure
//!   kinds the failover loop branches on
//! - the isolation tokens behind the semantic levels
//!
//! Classification is data, not behavior: the core retries only on
//! `ReplicaUnreachable` and otherwise propagates the binding's error
//! unchanged.

mod binding;
mod failure;
mod isolation;
pub mod postgres;

pub use binding::{Cursor, Driver};
pub use failure::FailureKind;
pub use isolation::IsolationLevel;
pub use postgres::{PgCursor, PgDriver};
