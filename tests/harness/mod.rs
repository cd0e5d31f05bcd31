//! Scripted mock driver for session-acquisition tests.
//!
//! The driver replays a fixed script of connect outcomes and records every
//! attempt (descriptor + isolation) so tests can assert on the exact
//! failover sequence.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

use stratadb::driver::{Cursor, Driver, FailureKind, IsolationLevel};
use stratadb::replica::{ReplicaAddress, ReplicaSelector};

/// Scriptable driver error carrying its own classification.
#[derive(Debug)]
pub struct MockError {
    pub kind: FailureKind,
    pub message: String,
}

impl MockError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::ReplicaUnreachable,
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Other,
            message: message.into(),
        }
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MockError {}

#[derive(Debug)]
pub struct MockConn {
    pub dsn: String,
    pub isolation: IsolationLevel,
}

#[derive(Debug, Default)]
pub struct MockCursor {
    batch_rows: usize,
}

impl Cursor for MockCursor {
    fn set_batch_rows(&mut self, rows: usize) {
        self.batch_rows = rows;
    }

    fn batch_rows(&self) -> usize {
        self.batch_rows
    }
}

/// Driver replaying a script of connect outcomes.
///
/// `Ok(())` means the attempt succeeds; an exhausted script also succeeds,
/// so `always_ok` is just an empty script.
pub struct MockDriver {
    script: RefCell<VecDeque<Result<(), MockError>>>,
    attempts: RefCell<Vec<(String, IsolationLevel)>>,
}

impl MockDriver {
    pub fn always_ok() -> Self {
        Self::scripted(Vec::new())
    }

    pub fn scripted(outcomes: Vec<Result<(), MockError>>) -> Self {
        Self {
            script: RefCell::new(outcomes.into()),
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// Descriptors of every attempt, in order.
    pub fn attempt_dsns(&self) -> Vec<String> {
        self.attempts
            .borrow()
            .iter()
            .map(|(dsn, _)| dsn.clone())
            .collect()
    }

    /// Isolation levels of every attempt, in order.
    pub fn attempt_isolations(&self) -> Vec<IsolationLevel> {
        self.attempts
            .borrow()
            .iter()
            .map(|(_, isolation)| *isolation)
            .collect()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.borrow().len()
    }
}

impl Driver for MockDriver {
    type Conn = MockConn;
    type Cursor = MockCursor;
    type Error = MockError;

    fn connect_with_isolation(
        &self,
        isolation: IsolationLevel,
        dsn: &str,
    ) -> Result<(MockConn, MockCursor), MockError> {
        self.attempts
            .borrow_mut()
            .push((dsn.to_string(), isolation));
        match self.script.borrow_mut().pop_front() {
            Some(Err(error)) => Err(error),
            _ => Ok((
                MockConn {
                    dsn: dsn.to_string(),
                    isolation,
                },
                MockCursor::default(),
            )),
        }
    }

    fn classify(&self, error: &MockError) -> FailureKind {
        error.kind
    }
}

/// Selector wrapper counting `current`/`next` calls.
pub struct CountingSelector<S> {
    inner: S,
    pub current_calls: usize,
    pub next_calls: usize,
}

impl<S> CountingSelector<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            current_calls: 0,
            next_calls: 0,
        }
    }
}

impl<S: ReplicaSelector> ReplicaSelector for CountingSelector<S> {
    fn current(&mut self) -> Option<ReplicaAddress> {
        self.current_calls += 1;
        self.inner.current()
    }

    fn next(&mut self) -> Option<ReplicaAddress> {
        self.next_calls += 1;
        self.inner.next()
    }
}

/// Parse a list of `host[:port]` strings.
pub fn addrs(raw: &[&str]) -> Vec<ReplicaAddress> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}
