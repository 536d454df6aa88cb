//! # causeway-engine
//!
//! The aggregation engine for the Causeway risk graph. `RiskGraph` wires
//! the Graph Model, Relation Maintainer, Aggregation Engine, and Risk
//! Classifier together over an injected entity store. Every mutation ends
//! with a full recomputation of outcome derived fields, so the data is
//! consistent for display by the time the operation returns.

pub mod aggregate;
pub mod cycles;
pub mod relations;
pub mod snapshot;

pub use aggregate::RecomputeSummary;
pub use relations::LinkReport;
pub use snapshot::{GraphView, Snapshot};

use std::sync::Arc;

use uuid::Uuid;

use causeway_core::config::CausewayConfig;
use causeway_core::constants::{PROBABILITY_MAX, PROBABILITY_MIN, SEVERITY_MAX, SEVERITY_MIN};
use causeway_core::entity::{
    Cause, CausePatch, NewCause, NewOutcome, Outcome, OutcomePatch, RiskTier,
};
use causeway_core::errors::{GraphError, RiskError, RiskResult, StoreError};
use causeway_core::traits::{CauseField, IEntityStore, OutcomeField};

/// Result of one mutating operation: the id it touched, the reverse-link
/// report (empty for outcome mutations and deletes), and the counters from
/// the recomputation that followed. Partial success (two of three outcome
/// links updated, say) is visible here rather than collapsed into a bare ok.
#[derive(Debug, Clone, Default)]
pub struct MutationReport {
    pub id: String,
    pub links: LinkReport,
    pub recompute: RecomputeSummary,
}

/// The engine facade. Owns the injected store and a config; substitutable
/// with any `IEntityStore` implementation, in-memory included.
pub struct RiskGraph {
    store: Arc<dyn IEntityStore>,
    config: CausewayConfig,
    view: GraphView,
}

impl RiskGraph {
    pub fn new(store: Arc<dyn IEntityStore>) -> Self {
        Self::with_config(store, CausewayConfig::default())
    }

    pub fn with_config(store: Arc<dyn IEntityStore>, config: CausewayConfig) -> Self {
        let view = GraphView::new(Arc::clone(&store));
        Self { store, config, view }
    }

    /// The read-through Graph Model.
    pub fn view(&self) -> &GraphView {
        &self.view
    }

    /// Create a cause, mirror its `causes` into the named outcomes, and
    /// recompute. Returns the generated id alongside the link report.
    pub fn add_cause(&self, new: NewCause) -> RiskResult<MutationReport> {
        self.check_cause_estimates(new.probability, new.severity)?;

        let id = Uuid::new_v4().to_string();
        if self.config.graph.reject_cycles && !new.causes.is_empty() {
            let snap = self.view.snapshot()?;
            if let Some(path) = cycles::would_create_cycle(&snap, &id, &new.caused_by, &new.causes)
            {
                return Err(GraphError::CycleDetected { path }.into());
            }
        }

        let cause = new.into_cause(id.clone());
        self.store.append_cause(&cause)?;
        tracing::debug!(id = %cause.id, "added cause");

        let links = relations::propagate(self.store.as_ref(), &cause.id, &cause.causes)?;
        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id, links, recompute })
    }

    /// Create an outcome and recompute. The caller may seed the derived
    /// fields; they hold until the first recomputation with resolvable
    /// contributors overwrites them.
    pub fn add_outcome(&self, new: NewOutcome) -> RiskResult<MutationReport> {
        self.check_outcome_estimates(new.probability, new.severity)?;

        let id = Uuid::new_v4().to_string();
        let outcome = new.into_outcome(id.clone());
        self.store.append_outcome(&outcome)?;
        tracing::debug!(id = %outcome.id, "added outcome");

        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id, recompute, ..Default::default() })
    }

    /// Apply a partial update to a cause, re-propagate its links if the
    /// post-edit `causes` field is non-empty, and recompute.
    pub fn update_cause(&self, id: &str, patch: CausePatch) -> RiskResult<MutationReport> {
        let current = self
            .view
            .find_cause(id)?
            .ok_or_else(|| RiskError::CauseNotFound { id: id.to_string() })?;

        if let Some(probability) = patch.probability {
            self.check_cause_estimates(probability, None)?;
        }
        if let Some(severity) = patch.severity {
            self.check_cause_estimates(None, severity)?;
        }

        let effective_causes = patch.causes.clone().unwrap_or_else(|| current.causes.clone());
        if self.config.graph.reject_cycles && patch.causes.is_some() {
            let caused_by = patch
                .caused_by
                .clone()
                .unwrap_or_else(|| current.caused_by.clone());
            let snap = self.view.snapshot()?;
            if let Some(path) = cycles::would_create_cycle(&snap, id, &caused_by, &effective_causes)
            {
                return Err(GraphError::CycleDetected { path }.into());
            }
        }

        if let Some(title) = &patch.title {
            self.store.update_cause_field(id, CauseField::Title, title)?;
        }
        if let Some(description) = &patch.description {
            self.store
                .update_cause_field(id, CauseField::Description, description)?;
        }
        if let Some(caused_by) = &patch.caused_by {
            self.store
                .update_cause_field(id, CauseField::CausedBy, &caused_by.to_string())?;
        }
        if let Some(causes) = &patch.causes {
            self.store
                .update_cause_field(id, CauseField::Causes, &causes.to_string())?;
        }
        if let Some(probability) = patch.probability {
            self.store
                .update_cause_field(id, CauseField::Probability, &render_opt(probability))?;
        }
        if let Some(severity) = patch.severity {
            self.store
                .update_cause_field(id, CauseField::Severity, &render_opt(severity))?;
        }

        let links = if effective_causes.is_empty() {
            LinkReport::default()
        } else {
            relations::propagate(self.store.as_ref(), id, &effective_causes)?
        };
        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id: id.to_string(), links, recompute })
    }

    /// Apply a partial update to an outcome and recompute. `caused_by` is
    /// directly editable here; no cause's `causes` field is reciprocally
    /// updated, and the next recomputation simply aggregates whatever the
    /// edited list resolves to.
    pub fn update_outcome(&self, id: &str, patch: OutcomePatch) -> RiskResult<MutationReport> {
        self.view
            .find_outcome(id)?
            .ok_or_else(|| RiskError::OutcomeNotFound { id: id.to_string() })?;
        self.check_outcome_estimates(patch.probability, patch.severity)?;

        if let Some(title) = &patch.title {
            self.store.update_outcome_field(id, OutcomeField::Title, title)?;
        }
        if let Some(description) = &patch.description {
            self.store
                .update_outcome_field(id, OutcomeField::Description, description)?;
        }
        if let Some(caused_by) = &patch.caused_by {
            self.store
                .update_outcome_field(id, OutcomeField::CausedBy, &caused_by.to_string())?;
        }
        if let Some(probability) = patch.probability {
            self.store
                .update_outcome_field(id, OutcomeField::Probability, &probability.to_string())?;
        }
        if let Some(severity) = patch.severity {
            self.store
                .update_outcome_field(id, OutcomeField::Severity, &severity.to_string())?;
        }

        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id: id.to_string(), recompute, ..Default::default() })
    }

    /// Delete a cause and recompute: outcomes that listed it lose its
    /// contribution on the next aggregation pass, and the dangling token
    /// in their `caused_by` is skipped with a warning from then on.
    pub fn delete_cause(&self, id: &str) -> RiskResult<MutationReport> {
        self.store.delete_cause(id).map_err(|e| match e {
            RiskError::Store(StoreError::RowNotFound { .. }) => RiskError::CauseNotFound {
                id: id.to_string(),
            },
            other => other,
        })?;
        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id: id.to_string(), recompute, ..Default::default() })
    }

    /// Delete an outcome and recompute.
    pub fn delete_outcome(&self, id: &str) -> RiskResult<MutationReport> {
        self.store.delete_outcome(id).map_err(|e| match e {
            RiskError::Store(StoreError::RowNotFound { .. }) => RiskError::OutcomeNotFound {
                id: id.to_string(),
            },
            other => other,
        })?;
        let recompute = aggregate::recompute_all(self.store.as_ref())?;
        Ok(MutationReport { id: id.to_string(), recompute, ..Default::default() })
    }

    pub fn get_cause(&self, id: &str) -> RiskResult<Cause> {
        self.view
            .find_cause(id)?
            .ok_or_else(|| RiskError::CauseNotFound { id: id.to_string() })
    }

    pub fn get_outcome(&self, id: &str) -> RiskResult<Outcome> {
        self.view
            .find_outcome(id)?
            .ok_or_else(|| RiskError::OutcomeNotFound { id: id.to_string() })
    }

    pub fn list_causes(&self) -> RiskResult<Vec<Cause>> {
        self.view.list_causes()
    }

    pub fn list_outcomes(&self) -> RiskResult<Vec<Outcome>> {
        self.view.list_outcomes()
    }

    /// Recompute all outcome derived fields. Idempotent: a second call
    /// with no intervening mutation performs zero writes.
    pub fn recompute_all(&self) -> RiskResult<RecomputeSummary> {
        aggregate::recompute_all(self.store.as_ref())
    }

    /// Map a probability to its display tier. Never persisted.
    pub fn classify(&self, probability: f64) -> RiskTier {
        RiskTier::for_probability(probability)
    }

    /// Report all cycles currently present in the adjacency fields.
    pub fn find_cycles(&self) -> RiskResult<Vec<Vec<String>>> {
        Ok(cycles::find_cycles(&self.view.snapshot()?))
    }

    /// Range check for user-supplied cause estimates. Strict mode rejects;
    /// otherwise out-of-range values pass through with a warning and are
    /// aggregated as-is.
    fn check_cause_estimates(
        &self,
        probability: Option<i64>,
        severity: Option<i64>,
    ) -> RiskResult<()> {
        if let Some(p) = probability {
            if !(PROBABILITY_MIN..=PROBABILITY_MAX).contains(&p) {
                self.flag_out_of_range("probability", &p.to_string())?;
            }
        }
        if let Some(s) = severity {
            if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&s) {
                self.flag_out_of_range("severity", &s.to_string())?;
            }
        }
        Ok(())
    }

    /// Range check for caller-seeded outcome fields.
    fn check_outcome_estimates(&self, probability: Option<f64>, severity: Option<i64>) -> RiskResult<()> {
        if let Some(p) = probability {
            if !(PROBABILITY_MIN as f64..=PROBABILITY_MAX as f64).contains(&p) {
                self.flag_out_of_range("probability", &p.to_string())?;
            }
        }
        if let Some(s) = severity {
            if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&s) {
                self.flag_out_of_range("severity", &s.to_string())?;
            }
        }
        Ok(())
    }

    fn flag_out_of_range(&self, field: &str, value: &str) -> RiskResult<()> {
        if self.config.validation.strict {
            return Err(RiskError::Validation {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        tracing::warn!(field, value, "out-of-range value accepted");
        Ok(())
    }
}

fn render_opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
