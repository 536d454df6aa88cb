//! # causeway-storage
//!
//! SQLite-backed implementation of the `IEntityStore` trait: schema
//! migrations, row CRUD, and single-cell updates for causes and outcomes.

pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::SqliteStore;

use causeway_core::errors::{RiskError, StoreError};

/// Wrap an underlying SQLite failure message into the error taxonomy.
pub(crate) fn to_store_err(message: impl Into<String>) -> RiskError {
    RiskError::Store(StoreError::Sqlite {
        message: message.into(),
    })
}
