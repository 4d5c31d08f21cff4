// Process-wide tables without a configured stubs map
//
// Runs in its own test binary so no other test configures SCOPER_STUBS_MAP.

use scoper_reflector::{ReferenceMap, Reflector, ReflectorError, STUBS_MAP_ENV};
use std::sync::Once;

fn unconfigure() {
    static CLEAR: Once = Once::new();
    CLEAR.call_once(|| std::env::remove_var(STUBS_MAP_ENV));
}

#[test]
fn test_new_fails_without_stubs_map() {
    unconfigure();

    let err = Reflector::new().unwrap_err();
    assert_eq!(err, ReflectorError::NotConfigured(STUBS_MAP_ENV));
    assert!(err.to_string().contains("SCOPER_STUBS_MAP"));
}

#[test]
fn test_failure_is_replayed_to_every_caller() {
    unconfigure();

    let first = Reflector::new().unwrap_err();
    let second = Reflector::new().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_from_env_rejects_missing_variable() {
    unconfigure();

    assert!(matches!(
        ReferenceMap::from_env(),
        Err(ReflectorError::NotConfigured(_))
    ));
}
