use serde::{Deserialize, Serialize};

use super::id_list::IdList;

/// An atomic risk-contributing entity. Probability and severity are
/// user-supplied estimates; both feed the derived fields of every outcome
/// listed in `causes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Short label.
    pub title: String,
    /// Free text.
    pub description: String,
    /// Ids of causes/outcomes that lead to this cause.
    pub caused_by: IdList,
    /// Ids of outcomes this cause contributes to.
    pub causes: IdList,
    /// Estimated likelihood as an integer percent, nominally 0–100.
    /// `None` = unset; contributes 0 to aggregates without being excluded.
    pub probability: Option<i64>,
    /// Estimated impact, nominally 1–10. `None` = unset, contributes 0.
    pub severity: Option<i64>,
}

impl Cause {
    /// Probability contribution to an outcome mean.
    pub fn probability_weight(&self) -> f64 {
        self.probability.unwrap_or(0) as f64
    }

    /// Severity contribution to an outcome max.
    pub fn severity_weight(&self) -> i64 {
        self.severity.unwrap_or(0)
    }
}

/// Creation parameters for a cause. The id is generated by the engine.
#[derive(Debug, Clone, Default)]
pub struct NewCause {
    pub title: String,
    pub description: String,
    pub caused_by: IdList,
    pub causes: IdList,
    pub probability: Option<i64>,
    pub severity: Option<i64>,
}

impl NewCause {
    pub fn into_cause(self, id: String) -> Cause {
        Cause {
            id,
            title: self.title,
            description: self.description,
            caused_by: self.caused_by,
            causes: self.causes,
            probability: self.probability,
            severity: self.severity,
        }
    }
}
