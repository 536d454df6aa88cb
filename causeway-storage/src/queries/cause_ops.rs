//! Row operations for the causes table.

use rusqlite::{params, Connection};

use causeway_core::entity::{Cause, IdList};
use causeway_core::errors::{RiskResult, StoreError};
use causeway_core::traits::{CauseField, EntityKind};

use crate::to_store_err;

/// Read all cause rows in insertion order.
pub fn read_all(conn: &Connection) -> RiskResult<Vec<Cause>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, description, caused_by, causes, probability, severity
             FROM causes ORDER BY rowid",
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_cause)
        .map_err(|e| to_store_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(e.to_string()))?;
    Ok(rows)
}

/// Insert a new cause row. All cells are written as text.
pub fn insert(conn: &Connection, cause: &Cause) -> RiskResult<()> {
    conn.execute(
        "INSERT INTO causes (id, title, description, caused_by, causes, probability, severity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            cause.id,
            cause.title,
            cause.description,
            cause.caused_by.to_string(),
            cause.causes.to_string(),
            render_opt_int(cause.probability),
            render_opt_int(cause.severity),
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// Update exactly one cell of the row matching `id`.
pub fn update_field(conn: &Connection, id: &str, field: CauseField, value: &str) -> RiskResult<()> {
    let rows = conn
        .execute(
            &format!("UPDATE causes SET {} = ?2 WHERE id = ?1", field.column()),
            params![id, value],
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    if rows == 0 {
        return Err(StoreError::RowNotFound {
            kind: EntityKind::Cause,
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Delete the row matching `id`.
pub fn delete(conn: &Connection, id: &str) -> RiskResult<()> {
    let rows = conn
        .execute("DELETE FROM causes WHERE id = ?1", params![id])
        .map_err(|e| to_store_err(e.to_string()))?;

    if rows == 0 {
        return Err(StoreError::RowNotFound {
            kind: EntityKind::Cause,
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

fn row_to_cause(row: &rusqlite::Row<'_>) -> Result<Cause, rusqlite::Error> {
    let id: String = row.get(0)?;
    let caused_by: String = row.get(3)?;
    let causes: String = row.get(4)?;
    let probability: String = row.get(5)?;
    let severity: String = row.get(6)?;
    Ok(Cause {
        title: row.get(1)?,
        description: row.get(2)?,
        caused_by: IdList::parse(&caused_by),
        causes: IdList::parse(&causes),
        probability: parse_opt_int(&id, "probability", &probability),
        severity: parse_opt_int(&id, "severity", &severity),
        id,
    })
}

/// Empty cell → unset. A malformed cell is logged and treated as unset.
pub(crate) fn parse_opt_int(id: &str, field: &str, cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    match cell.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(id, field, cell, "malformed numeric cell, treating as unset");
            None
        }
    }
}

pub(crate) fn render_opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
