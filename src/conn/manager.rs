//! The connection manager and its failover loop.

use crate::config::{load_replica_file, ConfigError, StoreOptions};
use crate::driver::{Cursor, Driver, IsolationLevel};
use crate::observability::{ConnMetrics, Logger};
use crate::replica::{ReplicaPool, ReplicaSelector};

use super::dsn::Dsn;
use super::session::Session;

/// Rows fetched per batch on every session cursor.
pub const CURSOR_BATCH_ROWS: usize = 64;

/// Opens database sessions, walking replica candidates on failure.
///
/// The manager is stateless between calls apart from metrics counters and
/// the pools' rotating offsets, so `open` may run concurrently from many
/// threads. Every call acquires a brand-new connection; pooling and
/// teardown live above this layer.
pub struct ConnectionManager<D: Driver> {
    driver: D,
    dsn: Dsn,
    keep_history: bool,
    store_isolation: IsolationLevel,
    replicas: Option<ReplicaPool>,
    ro_replicas: Option<ReplicaPool>,
    metrics: ConnMetrics,
}

impl<D: Driver> ConnectionManager<D> {
    pub fn new(driver: D, dsn: impl Into<String>) -> Self {
        Self {
            driver,
            dsn: Dsn::new(dsn),
            keep_history: true,
            store_isolation: IsolationLevel::ReadCommitted,
            replicas: None,
            ro_replicas: None,
            metrics: ConnMetrics::new(),
        }
    }

    /// Build a manager from validated options, loading any configured
    /// replica list files.
    pub fn from_options(driver: D, options: &StoreOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let mut manager = Self::new(driver, options.dsn.clone());
        manager.keep_history = options.keep_history;
        if let Some(level) = options.store_isolation {
            manager.store_isolation = level;
        }
        if let Some(path) = &options.replica_conf {
            manager.replicas = Some(ReplicaPool::new(load_replica_file(path)?));
        }
        if let Some(path) = &options.ro_replica_conf {
            manager.ro_replicas = Some(ReplicaPool::new(load_replica_file(path)?));
        }
        Ok(manager)
    }

    /// General-purpose replica pool consulted when `open` gets no selector.
    pub fn with_replicas(mut self, pool: ReplicaPool) -> Self {
        self.replicas = Some(pool);
        self
    }

    /// Read-only replica pool consulted by `open_for_load`.
    pub fn with_ro_replicas(mut self, pool: ReplicaPool) -> Self {
        self.ro_replicas = Some(pool);
        self
    }

    /// Isolation level used by `open_for_store`.
    pub fn with_store_isolation(mut self, isolation: IsolationLevel) -> Self {
        self.store_isolation = isolation;
        self
    }

    pub fn keep_history(&self) -> bool {
        self.keep_history
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn dsn(&self) -> &str {
        self.dsn.as_str()
    }

    pub fn metrics(&self) -> &ConnMetrics {
        &self.metrics
    }

    /// Open a session.
    ///
    /// Isolation defaults to `ReadCommitted`. With no selector argument, a
    /// session-scoped selector is drawn from the configured replica pool;
    /// with neither, the session goes straight to the primary. Both
    /// defaults are resolved here, once, before the first attempt.
    pub fn open(
        &self,
        isolation: Option<IsolationLevel>,
        selector: Option<&mut dyn ReplicaSelector>,
    ) -> Result<Session<D::Conn, D::Cursor>, D::Error> {
        let isolation = isolation.unwrap_or(IsolationLevel::ReadCommitted);
        match selector {
            Some(explicit) => self.open_with(isolation, Some(explicit)),
            None => {
                let mut pooled = self.replicas.as_ref().map(|pool| pool.selector());
                let selector = pooled.as_mut().map(|s| s as &mut dyn ReplicaSelector);
                self.open_with(isolation, selector)
            }
        }
    }

    /// Open a read-only ("load") session: serializable isolation, routed
    /// through the read-only replica pool.
    pub fn open_for_load(&self) -> Result<Session<D::Conn, D::Cursor>, D::Error> {
        let mut pooled = self.ro_replicas.as_ref().map(|pool| pool.selector());
        let selector = pooled.as_mut().map(|s| s as &mut dyn ReplicaSelector);
        self.open_with(IsolationLevel::Serializable, selector)
    }

    /// Open a write-capable ("store") session against the primary, under
    /// the configured store isolation level.
    pub fn open_for_store(&self) -> Result<Session<D::Conn, D::Cursor>, D::Error> {
        self.open_with(self.store_isolation, None)
    }

    fn open_with(
        &self,
        isolation: IsolationLevel,
        mut selector: Option<&mut dyn ReplicaSelector>,
    ) -> Result<Session<D::Conn, D::Cursor>, D::Error> {
        let mut replica = selector.as_mut().and_then(|s| s.current());
        let mut target = match &replica {
            Some(addr) => self.dsn.with_replica(addr),
            None => self.dsn.clone(),
        };

        loop {
            self.metrics.record_attempt();
            match self.driver.connect_with_isolation(isolation, target.as_str()) {
                Ok((conn, mut cursor)) => {
                    cursor.set_batch_rows(CURSOR_BATCH_ROWS);
                    self.metrics.record_session();
                    return Ok(Session::new(conn, cursor, replica));
                }
                Err(err) => {
                    self.metrics.record_failure();
                    if self.driver.classify(&err).is_replica_unreachable() {
                        if let Some(failed) = &replica {
                            if let Some(next) = selector.as_mut().and_then(|s| s.next()) {
                                let failed_s = failed.to_string();
                                let err_s = err.to_string();
                                let next_s = next.to_string();
                                Logger::warn(
                                    "REPLICA_CONNECT_FAILED",
                                    &[
                                        ("replica", failed_s.as_str()),
                                        ("error", err_s.as_str()),
                                        ("next", next_s.as_str()),
                                    ],
                                );
                                self.metrics.record_failover();
                                target = self.dsn.with_replica(&next);
                                replica = Some(next);
                                continue;
                            }
                        }
                    }
                    let err_s = err.to_string();
                    Logger::warn("CONNECT_FAILED", &[("error", err_s.as_str())]);
                    return Err(err);
                }
            }
        }
    }
}
