//! PostgreSQL driver binding over the blocking rust-postgres client.
//!
//! The DSN is parsed by `postgres::Config`, so it accepts the usual
//! `key=value` descriptor form (`dbname=zodb host=10.0.0.1 port=5433`).
//! The requested isolation level is applied with
//! `SET SESSION CHARACTERISTICS` right after connecting.

use std::error::Error as _;
use std::io;

use postgres::error::SqlState;
use postgres::{Client, Config, NoTls};

use super::binding::{Cursor, Driver};
use super::failure::FailureKind;
use super::isolation::IsolationLevel;

/// Blocking PostgreSQL driver binding.
#[derive(Debug, Default)]
pub struct PgDriver;

impl PgDriver {
    pub fn new() -> Self {
        PgDriver
    }
}

/// Cursor handle for PostgreSQL sessions.
///
/// rust-postgres has no standalone cursor object; portal reads take the
/// batch size per call. The handle carries that size so the storage layer
/// can pass it to `query_portal`.
#[derive(Debug, Default)]
pub struct PgCursor {
    batch_rows: usize,
}

impl PgCursor {
    /// Batch size in the `i32` form `query_portal` expects.
    pub fn max_rows(&self) -> i32 {
        self.batch_rows.min(i32::MAX as usize) as i32
    }
}

impl Cursor for PgCursor {
    fn set_batch_rows(&mut self, rows: usize) {
        self.batch_rows = rows;
    }

    fn batch_rows(&self) -> usize {
        self.batch_rows
    }
}

fn isolation_statement(isolation: IsolationLevel) -> String {
    format!(
        "SET SESSION CHARACTERISTICS AS TRANSACTION ISOLATION LEVEL {}",
        isolation.as_sql()
    )
}

fn has_io_source(error: &postgres::Error) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        if cause.is::<io::Error>() {
            return true;
        }
        source = cause.source();
    }
    false
}

impl Driver for PgDriver {
    type Conn = Client;
    type Cursor = PgCursor;
    type Error = postgres::Error;

    fn connect_with_isolation(
        &self,
        isolation: IsolationLevel,
        dsn: &str,
    ) -> Result<(Client, PgCursor), postgres::Error> {
        let config: Config = dsn.parse()?;
        let mut client = config.connect(NoTls)?;
        client.batch_execute(&isolation_statement(isolation))?;
        Ok((client, PgCursor::default()))
    }

    fn classify(&self, error: &postgres::Error) -> FailureKind {
        if let Some(code) = error.code() {
            // The server answered, so the endpoint itself is reachable.
            if code == &SqlState::CANNOT_CONNECT_NOW
                || code == &SqlState::SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION
                || code == &SqlState::SQLSERVER_REJECTED_ESTABLISHMENT_OF_SQLCONNECTION
            {
                return FailureKind::ReplicaUnreachable;
            }
            if code == &SqlState::ADMIN_SHUTDOWN
                || code == &SqlState::CRASH_SHUTDOWN
                || code == &SqlState::CONNECTION_EXCEPTION
                || code == &SqlState::CONNECTION_FAILURE
                || code == &SqlState::CONNECTION_DOES_NOT_EXIST
            {
                return FailureKind::Disconnected;
            }
            return FailureKind::Other;
        }
        if error.is_closed() {
            return FailureKind::Disconnected;
        }
        // No server response and an I/O cause underneath: the endpoint
        // never answered (refused, unroutable, timed out).
        if has_io_source(error) {
            return FailureKind::ReplicaUnreachable;
        }
        FailureKind::Other
    }
}
