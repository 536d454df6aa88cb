//! Config defaults and TOML parsing.

use std::path::PathBuf;

use causeway_core::config::CausewayConfig;

#[test]
fn empty_toml_gives_defaults() {
    let config = CausewayConfig::from_toml_str("").unwrap();
    assert_eq!(config.storage.path, PathBuf::from("causeway.db"));
    assert!(!config.validation.strict);
    assert!(!config.graph.reject_cycles);
}

#[test]
fn sections_override_independently() {
    let config = CausewayConfig::from_toml_str(
        r#"
        [storage]
        path = "/tmp/risk.db"

        [validation]
        strict = true
        "#,
    )
    .unwrap();
    assert_eq!(config.storage.path, PathBuf::from("/tmp/risk.db"));
    assert!(config.validation.strict);
    assert!(!config.graph.reject_cycles);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = CausewayConfig::from_toml_str("storage = 3").unwrap_err();
    assert!(matches!(
        err,
        causeway_core::errors::RiskError::Config { .. }
    ));
}
