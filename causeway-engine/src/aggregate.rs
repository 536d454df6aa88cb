//! Aggregation Engine: recompute every outcome's derived probability and
//! severity from its contributing causes.
//!
//! Runs after any cause or outcome mutation. Cyclic references are not
//! detected here: a contributor is read at whatever value the store holds
//! at call time (stale-read semantics, not a fixed-point solve).

use causeway_core::errors::{RiskError, RiskResult};
use causeway_core::traits::{IEntityStore, OutcomeField};

use crate::snapshot::Snapshot;

/// Counters from one recomputation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeSummary {
    /// Outcomes examined.
    pub outcomes_seen: usize,
    /// Outcomes with at least one cell written.
    pub outcomes_updated: usize,
    /// Individual cell writes (probability and severity count separately).
    pub writes: usize,
    /// Outcomes with zero resolvable contributors; their stored values are
    /// left untouched.
    pub skipped_no_causes: usize,
    /// `caused_by` tokens that matched no cause row.
    pub unresolved_refs: usize,
}

/// Recompute derived fields for every outcome.
///
/// For each outcome, `caused_by` tokens are resolved against the cause
/// table; unresolved ids are logged and skipped. With no resolved
/// contributors the outcome keeps its last stored values. Otherwise the
/// probability becomes the arithmetic mean of contributor probabilities
/// and the severity the maximum contributor severity, with an unset
/// contributor field counting as 0 without shrinking the denominator.
///
/// Each changed cell is written back independently; unchanged cells are
/// not written, which makes back-to-back runs idempotent. A write failure
/// does not stop the remaining outcomes; the first error is returned after
/// the full pass.
pub fn recompute_all(store: &dyn IEntityStore) -> RiskResult<RecomputeSummary> {
    let snapshot = Snapshot {
        causes: store.read_causes()?,
        outcomes: store.read_outcomes()?,
    };
    recompute_snapshot(store, &snapshot)
}

/// Recompute from an already-taken snapshot.
pub fn recompute_snapshot(
    store: &dyn IEntityStore,
    snapshot: &Snapshot,
) -> RiskResult<RecomputeSummary> {
    let index = snapshot.cause_index();
    let mut summary = RecomputeSummary::default();
    let mut first_err: Option<RiskError> = None;

    for outcome in &snapshot.outcomes {
        summary.outcomes_seen += 1;

        let mut sum = 0.0;
        let mut max_severity = 0;
        let mut count = 0usize;
        for token in outcome.caused_by.iter() {
            let Some(cause) = index.get(token) else {
                tracing::warn!(
                    outcome_id = %outcome.id,
                    cause_id = token,
                    "contributor not found, excluded from aggregation"
                );
                summary.unresolved_refs += 1;
                continue;
            };
            sum += cause.probability_weight();
            max_severity = max_severity.max(cause.severity_weight());
            count += 1;
        }

        if count == 0 {
            summary.skipped_no_causes += 1;
            continue;
        }

        let probability = sum / count as f64;
        let mut wrote = false;

        if (outcome.probability - probability).abs() > f64::EPSILON {
            match store.update_outcome_field(
                &outcome.id,
                OutcomeField::Probability,
                &probability.to_string(),
            ) {
                Ok(()) => {
                    summary.writes += 1;
                    wrote = true;
                }
                Err(e) => {
                    tracing::error!(outcome_id = %outcome.id, error = %e, "probability write failed");
                    first_err.get_or_insert(e);
                }
            }
        }

        if outcome.severity != max_severity {
            match store.update_outcome_field(
                &outcome.id,
                OutcomeField::Severity,
                &max_severity.to_string(),
            ) {
                Ok(()) => {
                    summary.writes += 1;
                    wrote = true;
                }
                Err(e) => {
                    tracing::error!(outcome_id = %outcome.id, error = %e, "severity write failed");
                    first_err.get_or_insert(e);
                }
            }
        }

        if wrote {
            summary.outcomes_updated += 1;
        }
        tracing::debug!(
            outcome_id = %outcome.id,
            probability,
            severity = max_severity,
            contributors = count,
            "recomputed outcome"
        );
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
