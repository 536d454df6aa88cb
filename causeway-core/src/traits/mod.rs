pub mod store;

pub use store::{CauseField, EntityKind, IEntityStore, OutcomeField};
