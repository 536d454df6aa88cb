/// Causeway system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nominal probability range for causes (integer percent).
pub const PROBABILITY_MIN: i64 = 0;
pub const PROBABILITY_MAX: i64 = 100;

/// Nominal severity range for causes.
pub const SEVERITY_MIN: i64 = 1;
pub const SEVERITY_MAX: i64 = 10;

/// Tier boundaries: probabilities below the floor are Low, above the
/// ceiling are High, and both boundary values themselves are Medium.
pub const TIER_MEDIUM_FLOOR: f64 = 30.0;
pub const TIER_MEDIUM_CEIL: f64 = 70.0;
