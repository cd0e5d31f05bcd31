//! Session Acquisition
//!
//! Turns (isolation level, replica selector) into one open session.
//! Invariants:
//!
//! - The base connection descriptor is immutable; replica overrides are
//!   derived per attempt and never fold back into it
//! - A candidate failure retries against the next candidate only when the
//!   driver classifies it replica-unreachable; every other failure
//!   propagates unchanged
//! - Every successful session has its cursor batch size set to
//!   [`CURSOR_BATCH_ROWS`] and carries the replica it was opened against
//! - No backoff, no iteration cap: termination rests on the selector's
//!   exhaustion contract

mod dsn;
mod manager;
mod session;

pub use dsn::Dsn;
pub use manager::{ConnectionManager, CURSOR_BATCH_ROWS};
pub use session::Session;
