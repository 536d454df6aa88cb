//! Schema migrations, versioned through `PRAGMA user_version`.
//! Each step runs at most once; the pragma records the last applied version.

use rusqlite::Connection;

use causeway_core::errors::{RiskResult, StoreError};

/// Ordered migration steps. Every cell is TEXT: the store is a table of
/// string fields, and numeric parsing happens at the read boundary.
const MIGRATIONS: &[(u32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS causes (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        caused_by TEXT NOT NULL DEFAULT '',
        causes TEXT NOT NULL DEFAULT '',
        probability TEXT NOT NULL DEFAULT '',
        severity TEXT NOT NULL DEFAULT ''
    );
    CREATE TABLE IF NOT EXISTS outcomes (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        caused_by TEXT NOT NULL DEFAULT '',
        probability TEXT NOT NULL DEFAULT '',
        severity TEXT NOT NULL DEFAULT ''
    );",
)];

/// Apply all migrations newer than the current `user_version`.
pub fn run_migrations(conn: &Connection) -> RiskResult<()> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StoreError::MigrationFailed {
            version: 0,
            reason: format!("read user_version: {e}"),
        })?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| StoreError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StoreError::MigrationFailed {
                version,
                reason: format!("set user_version: {e}"),
            })?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}
