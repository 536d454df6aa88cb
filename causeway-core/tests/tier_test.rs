//! Tier classification boundaries.

use causeway_core::entity::RiskTier;

#[test]
fn boundaries_belong_to_medium() {
    assert_eq!(RiskTier::for_probability(29.0), RiskTier::Low);
    assert_eq!(RiskTier::for_probability(30.0), RiskTier::Medium);
    assert_eq!(RiskTier::for_probability(70.0), RiskTier::Medium);
    assert_eq!(RiskTier::for_probability(71.0), RiskTier::High);
}

#[test]
fn total_over_out_of_range_input() {
    // No clamping: the comparison logic simply extends.
    assert_eq!(RiskTier::for_probability(-5.0), RiskTier::Low);
    assert_eq!(RiskTier::for_probability(0.0), RiskTier::Low);
    assert_eq!(RiskTier::for_probability(100.0), RiskTier::High);
    assert_eq!(RiskTier::for_probability(250.0), RiskTier::High);
}

#[test]
fn display_labels() {
    assert_eq!(RiskTier::Low.to_string(), "low");
    assert_eq!(RiskTier::Medium.to_string(), "medium");
    assert_eq!(RiskTier::High.to_string(), "high");
}
