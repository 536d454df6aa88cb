use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Cause, Outcome};
use crate::errors::RiskResult;

/// The two entity tables. Ids are unique within a kind, not across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Cause,
    Outcome,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cause => "cause",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addressable cells of a cause row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseField {
    Title,
    Description,
    CausedBy,
    Causes,
    Probability,
    Severity,
}

impl CauseField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::CausedBy => "caused_by",
            Self::Causes => "causes",
            Self::Probability => "probability",
            Self::Severity => "severity",
        }
    }
}

/// Addressable cells of an outcome row. Outcomes have no forward `causes`
/// field; the adjacency is held on the cause side and mirrored into
/// `caused_by` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeField {
    Title,
    Description,
    CausedBy,
    Probability,
    Severity,
}

impl OutcomeField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::CausedBy => "caused_by",
            Self::Probability => "probability",
            Self::Severity => "severity",
        }
    }
}

/// Row-oriented entity store: full-table read, append, single-cell update,
/// row delete. The engine treats every call as blocking and never retries;
/// a failed operation surfaces as an error at the call site.
///
/// Field values cross this boundary as text: the store is a table of
/// string cells, and numeric parsing happens on read.
pub trait IEntityStore: Send + Sync {
    /// All cause rows in insertion order. Empty means no records.
    fn read_causes(&self) -> RiskResult<Vec<Cause>>;

    /// All outcome rows in insertion order.
    fn read_outcomes(&self) -> RiskResult<Vec<Outcome>>;

    /// Insert a new cause row. The caller supplies all fields, id included.
    fn append_cause(&self, cause: &Cause) -> RiskResult<()>;

    /// Insert a new outcome row.
    fn append_outcome(&self, outcome: &Outcome) -> RiskResult<()>;

    /// Update exactly one cell of the cause row matching `id`.
    /// Fails with `StoreError::RowNotFound` if no such row exists.
    fn update_cause_field(&self, id: &str, field: CauseField, value: &str) -> RiskResult<()>;

    /// Update exactly one cell of the outcome row matching `id`.
    fn update_outcome_field(&self, id: &str, field: OutcomeField, value: &str) -> RiskResult<()>;

    /// Remove the cause row matching `id`. Fails if absent.
    fn delete_cause(&self, id: &str) -> RiskResult<()>;

    /// Remove the outcome row matching `id`. Fails if absent.
    fn delete_outcome(&self, id: &str) -> RiskResult<()>;
}
