use serde::{Deserialize, Serialize};

use super::id_list::IdList;

/// An entity whose probability and severity are derived from its
/// contributing causes. The derived fields are stored, not computed on
/// read: recomputation overwrites them whenever at least one contributor
/// resolves, and an outcome with no resolvable contributors keeps its
/// last stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Opaque unique identifier, immutable once created.
    pub id: String,
    /// Short label.
    pub title: String,
    /// Free text.
    pub description: String,
    /// Ids of the causes contributing to this outcome.
    pub caused_by: IdList,
    /// Derived: arithmetic mean of contributing cause probabilities.
    pub probability: f64,
    /// Derived: maximum severity across contributing causes.
    pub severity: i64,
}

/// Creation parameters for an outcome. The id is generated by the engine;
/// probability/severity may seed the stored values until the first
/// recomputation with resolvable contributors overwrites them.
#[derive(Debug, Clone, Default)]
pub struct NewOutcome {
    pub title: String,
    pub description: String,
    pub caused_by: IdList,
    pub probability: Option<f64>,
    pub severity: Option<i64>,
}

impl NewOutcome {
    pub fn into_outcome(self, id: String) -> Outcome {
        Outcome {
            id,
            title: self.title,
            description: self.description,
            caused_by: self.caused_by,
            probability: self.probability.unwrap_or(0.0),
            severity: self.severity.unwrap_or(0),
        }
    }
}
