pub mod cause;
pub mod id_list;
pub mod outcome;
pub mod patch;
pub mod tier;

pub use cause::{Cause, NewCause};
pub use id_list::IdList;
pub use outcome::{NewOutcome, Outcome};
pub use patch::{CausePatch, OutcomePatch};
pub use tier::RiskTier;
