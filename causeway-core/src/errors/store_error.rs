use crate::traits::EntityKind;

/// Storage-layer errors for entity store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("no {kind} row with id {id}")]
    RowNotFound { kind: EntityKind, id: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
