//! Graph Model: read-through lookups over the injected store.
//!
//! There is no in-memory write-through cache. Every mutation goes directly
//! to the store and every lookup re-reads, trading latency for correctness
//! at the interactive, low-volume scale this engine targets.

use std::collections::HashMap;
use std::sync::Arc;

use causeway_core::entity::{Cause, Outcome};
use causeway_core::errors::RiskResult;
use causeway_core::traits::IEntityStore;

/// A paired read of both tables, taken once and used as the input set for
/// a single recomputation or cycle scan.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub causes: Vec<Cause>,
    pub outcomes: Vec<Outcome>,
}

impl Snapshot {
    /// Index causes by id for contributor resolution.
    pub fn cause_index(&self) -> HashMap<&str, &Cause> {
        self.causes.iter().map(|c| (c.id.as_str(), c)).collect()
    }
}

/// The materialized view of the graph. Lookup is by exact, case-sensitive
/// string match; callers are expected to pass canonical ids.
pub struct GraphView {
    store: Arc<dyn IEntityStore>,
}

impl GraphView {
    pub fn new(store: Arc<dyn IEntityStore>) -> Self {
        Self { store }
    }

    /// Re-reads the cause table and returns the matching record, if any.
    pub fn find_cause(&self, id: &str) -> RiskResult<Option<Cause>> {
        Ok(self.store.read_causes()?.into_iter().find(|c| c.id == id))
    }

    /// Re-reads the outcome table and returns the matching record, if any.
    pub fn find_outcome(&self, id: &str) -> RiskResult<Option<Outcome>> {
        Ok(self.store.read_outcomes()?.into_iter().find(|o| o.id == id))
    }

    pub fn list_causes(&self) -> RiskResult<Vec<Cause>> {
        self.store.read_causes()
    }

    pub fn list_outcomes(&self) -> RiskResult<Vec<Outcome>> {
        self.store.read_outcomes()
    }

    /// One paired read of both tables.
    pub fn snapshot(&self) -> RiskResult<Snapshot> {
        Ok(Snapshot {
            causes: self.store.read_causes()?,
            outcomes: self.store.read_outcomes()?,
        })
    }
}
