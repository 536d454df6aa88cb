//! Row operations for the outcomes table.

use rusqlite::{params, Connection};

use causeway_core::entity::{IdList, Outcome};
use causeway_core::errors::{RiskResult, StoreError};
use causeway_core::traits::{EntityKind, OutcomeField};

use crate::to_store_err;

/// Read all outcome rows in insertion order.
pub fn read_all(conn: &Connection) -> RiskResult<Vec<Outcome>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, description, caused_by, probability, severity
             FROM outcomes ORDER BY rowid",
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_outcome)
        .map_err(|e| to_store_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(e.to_string()))?;
    Ok(rows)
}

/// Insert a new outcome row. All cells are written as text; the derived
/// probability uses Rust's shortest round-trip float formatting so a
/// write/read cycle reproduces the value exactly.
pub fn insert(conn: &Connection, outcome: &Outcome) -> RiskResult<()> {
    conn.execute(
        "INSERT INTO outcomes (id, title, description, caused_by, probability, severity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            outcome.id,
            outcome.title,
            outcome.description,
            outcome.caused_by.to_string(),
            outcome.probability.to_string(),
            outcome.severity.to_string(),
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// Update exactly one cell of the row matching `id`.
pub fn update_field(
    conn: &Connection,
    id: &str,
    field: OutcomeField,
    value: &str,
) -> RiskResult<()> {
    let rows = conn
        .execute(
            &format!("UPDATE outcomes SET {} = ?2 WHERE id = ?1", field.column()),
            params![id, value],
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    if rows == 0 {
        return Err(StoreError::RowNotFound {
            kind: EntityKind::Outcome,
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Delete the row matching `id`.
pub fn delete(conn: &Connection, id: &str) -> RiskResult<()> {
    let rows = conn
        .execute("DELETE FROM outcomes WHERE id = ?1", params![id])
        .map_err(|e| to_store_err(e.to_string()))?;

    if rows == 0 {
        return Err(StoreError::RowNotFound {
            kind: EntityKind::Outcome,
            id: id.to_string(),
        }
        .into());
    }
    Ok(())
}

fn row_to_outcome(row: &rusqlite::Row<'_>) -> Result<Outcome, rusqlite::Error> {
    let id: String = row.get(0)?;
    let caused_by: String = row.get(3)?;
    let probability: String = row.get(4)?;
    let severity: String = row.get(5)?;
    Ok(Outcome {
        title: row.get(1)?,
        description: row.get(2)?,
        caused_by: IdList::parse(&caused_by),
        probability: parse_float(&id, "probability", &probability),
        severity: super::cause_ops::parse_opt_int(&id, "severity", &severity).unwrap_or(0),
        id,
    })
}

/// Empty or malformed cell → 0.0 (outcome derived fields default to zero
/// until the first recomputation writes them).
fn parse_float(id: &str, field: &str, cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return 0.0;
    }
    match cell.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(id, field, cell, "malformed numeric cell, treating as zero");
            0.0
        }
    }
}
