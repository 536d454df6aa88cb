//! Relation Maintainer: when a cause declares outcomes in its `causes`
//! field, mirror the cause id into each named outcome's `caused_by`.
//!
//! Propagation is one-way. Editing an outcome's `caused_by` directly does
//! not update any cause's `causes` field, and drift introduced that way is
//! not repaired here.

use causeway_core::entity::IdList;
use causeway_core::errors::{RiskError, RiskResult};
use causeway_core::traits::{IEntityStore, OutcomeField};

/// Per-target outcome of one propagation pass. Partial success is visible
/// here rather than collapsed into a single ok/err.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Outcomes whose `caused_by` gained the cause id.
    pub updated: Vec<String>,
    /// Outcomes that already carried the cause id; no write performed.
    pub unchanged: Vec<String>,
    /// Outcome ids named by the cause but absent from the store. The edge
    /// stays recorded on the cause side only.
    pub missing: Vec<String>,
}

impl LinkReport {
    /// True when every named outcome was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Append `cause_id` to the `caused_by` of every outcome named in `causes`.
///
/// The append is deduplicating: an id already textually present as an
/// exact token is never added again, so repeated edits of the same cause
/// cannot grow duplicates. A missing outcome is logged and skipped without
/// aborting the rest of the batch. A store write failure is also carried
/// past the remaining targets and surfaced once the batch has been
/// attempted in full.
pub fn propagate(
    store: &dyn IEntityStore,
    cause_id: &str,
    causes: &IdList,
) -> RiskResult<LinkReport> {
    let mut report = LinkReport::default();
    if causes.is_empty() {
        return Ok(report);
    }

    let outcomes = store.read_outcomes()?;
    // Local working copies so a duplicate token in `causes` sees the
    // already-appended state.
    let mut links: Vec<(String, IdList)> = outcomes
        .into_iter()
        .map(|o| (o.id, o.caused_by))
        .collect();

    let mut first_err: Option<RiskError> = None;
    for target in causes.iter() {
        let Some((_, caused_by)) = links.iter_mut().find(|(id, _)| id.as_str() == target) else {
            tracing::warn!(cause_id, outcome_id = target, "linked outcome not found, skipping");
            report.missing.push(target.to_string());
            continue;
        };

        if !caused_by.push_unique(cause_id) {
            report.unchanged.push(target.to_string());
            continue;
        }

        match store.update_outcome_field(target, OutcomeField::CausedBy, &caused_by.to_string()) {
            Ok(()) => report.updated.push(target.to_string()),
            Err(e) => {
                tracing::error!(cause_id, outcome_id = target, error = %e, "reverse-link write failed");
                first_err.get_or_insert(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(report),
    }
}
