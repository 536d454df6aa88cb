//! # causeway-core
//!
//! Foundation crate for the Causeway risk graph.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use entity::{Cause, CausePatch, IdList, NewCause, NewOutcome, Outcome, OutcomePatch, RiskTier};
pub use errors::{RiskError, RiskResult};
pub use traits::{CauseField, EntityKind, IEntityStore, OutcomeField};
