use super::id_list::IdList;

/// Partial update for a cause. `None` fields are left unchanged.
///
/// `probability`/`severity` take `Some(None)` to clear the stored value
/// back to unset.
#[derive(Debug, Clone, Default)]
pub struct CausePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub caused_by: Option<IdList>,
    pub causes: Option<IdList>,
    pub probability: Option<Option<i64>>,
    pub severity: Option<Option<i64>>,
}

impl CausePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.caused_by.is_none()
            && self.causes.is_none()
            && self.probability.is_none()
            && self.severity.is_none()
    }
}

/// Partial update for an outcome. `None` fields are left unchanged.
///
/// Setting `probability`/`severity` directly is allowed (the store is
/// field-addressable) but the next recomputation overwrites both whenever
/// the outcome has at least one resolvable contributor.
#[derive(Debug, Clone, Default)]
pub struct OutcomePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub caused_by: Option<IdList>,
    pub probability: Option<f64>,
    pub severity: Option<i64>,
}

impl OutcomePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.caused_by.is_none()
            && self.probability.is_none()
            && self.severity.is_none()
    }
}
