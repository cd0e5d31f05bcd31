//! Store Configuration
//!
//! Options for the connection layer: the base DSN, the history-keeping
//! flag passed through to the storage engine, optional replica list files
//! for general-purpose and read-only routing, and the store-session
//! isolation override. Configured externally, immutable after startup.

mod errors;
mod options;
mod replica_file;

pub use errors::{ConfigError, ConfigResult};
pub use options::StoreOptions;
pub use replica_file::load_replica_file;
