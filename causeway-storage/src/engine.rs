//! SqliteStore — owns the connection, runs migrations on open, and
//! implements the IEntityStore row contract for both tables.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use causeway_core::entity::{Cause, Outcome};
use causeway_core::errors::RiskResult;
use causeway_core::traits::{CauseField, IEntityStore, OutcomeField};

use crate::migrations;
use crate::queries::{cause_ops, outcome_ops};
use crate::to_store_err;

/// SQLite-backed entity store. The engine is single-session and
/// synchronous, so a single mutex-guarded connection replaces a pool.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a store backed by a file on disk, creating it if needed.
    pub fn open(path: &Path) -> RiskResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory store (for tests and ephemeral sessions).
    pub fn open_in_memory() -> RiskResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> RiskResult<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> RiskResult<T>
    where
        F: FnOnce(&Connection) -> RiskResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_store_err("connection mutex poisoned"))?;
        f(&conn)
    }
}

impl IEntityStore for SqliteStore {
    fn read_causes(&self) -> RiskResult<Vec<Cause>> {
        self.with_conn(cause_ops::read_all)
    }

    fn read_outcomes(&self) -> RiskResult<Vec<Outcome>> {
        self.with_conn(outcome_ops::read_all)
    }

    fn append_cause(&self, cause: &Cause) -> RiskResult<()> {
        self.with_conn(|conn| cause_ops::insert(conn, cause))
    }

    fn append_outcome(&self, outcome: &Outcome) -> RiskResult<()> {
        self.with_conn(|conn| outcome_ops::insert(conn, outcome))
    }

    fn update_cause_field(&self, id: &str, field: CauseField, value: &str) -> RiskResult<()> {
        self.with_conn(|conn| cause_ops::update_field(conn, id, field, value))
    }

    fn update_outcome_field(&self, id: &str, field: OutcomeField, value: &str) -> RiskResult<()> {
        self.with_conn(|conn| outcome_ops::update_field(conn, id, field, value))
    }

    fn delete_cause(&self, id: &str) -> RiskResult<()> {
        self.with_conn(|conn| cause_ops::delete(conn, id))
    }

    fn delete_outcome(&self, id: &str) -> RiskResult<()> {
        self.with_conn(|conn| outcome_ops::delete(conn, id))
    }
}
