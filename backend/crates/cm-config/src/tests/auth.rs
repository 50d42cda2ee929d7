use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_zero_max_failed_attempts_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("CM_AUTH_MAX_FAILED_ATTEMPTS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_failed_attempts"));
}

#[test]
#[serial]
fn given_max_failed_attempts_above_limit_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("CM_AUTH_MAX_FAILED_ATTEMPTS", "101");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_failed_attempts_at_bounds_when_validate_then_ok() {
    for value in ["1", "100"] {
        let (_temp, _guard) = setup_config_dir();
        let _attempts = EnvGuard::set("CM_AUTH_MAX_FAILED_ATTEMPTS", value);

        let result = Config::load().unwrap().validate();

        assert_that!(result, ok(anything()));
    }
}
