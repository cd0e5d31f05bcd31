//! stratadb - PostgreSQL connection acquisition with read-replica failover
//!
//! This crate is the connection-acquisition layer of the strata object
//! store. Given a base connection descriptor and optional replica endpoint
//! lists, it produces live, correctly configured database sessions
//! (connection + cursor) for read or write traffic, retrying against
//! alternate replicas when the selected one is unreachable.

pub mod config;
pub mod conn;
pub mod driver;
pub mod observability;
pub mod replica;
