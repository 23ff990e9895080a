//! Global subscriber installation.
//!
//! Runs in its own test binary so the global subscriber starts unset.

use rulebook_log::{Config, LogError};

#[test]
fn second_install_reports_init_error() {
    rulebook_log::init_test();
    rulebook_log::init_test();
    tracing::info!(target: "rulebook_log_tests", "still logging");

    let err = rulebook_log::init_with(Config::default()).unwrap_err();
    assert!(matches!(err, LogError::Init(_)));
}

#[test]
fn bad_filter_fails_before_install() {
    let err = rulebook_log::init_with(Config {
        level: "rulebook=loud".to_string(),
        ..Config::default()
    })
    .unwrap_err();
    assert!(matches!(err, LogError::Filter(_)));
}
