//! Environment-driven configuration. These mutate process env vars, so they
//! run serially.

use std::path::PathBuf;

use chama::startup::{
    StartupConfig, API_URL_ENV, DEFAULT_API_URL, LOG_FILE_ENV, SKIP_LOGIN_ENV,
};
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(API_URL_ENV);
    std::env::remove_var(SKIP_LOGIN_ENV);
    std::env::remove_var(LOG_FILE_ENV);
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = StartupConfig::from_env();

    assert_eq!(config.api.base_url, DEFAULT_API_URL);
    assert!(!config.skip_login);
    assert!(config.api.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    clear_env();
    std::env::set_var(API_URL_ENV, "https://chama.example.com/api/");
    std::env::set_var(SKIP_LOGIN_ENV, "1");
    std::env::set_var(LOG_FILE_ENV, "/tmp/chama-test.log");

    let config = StartupConfig::from_env();
    clear_env();

    assert_eq!(config.api.base_url, "https://chama.example.com/api");
    assert!(config.skip_login);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/chama-test.log")));
}

#[test]
#[serial]
fn test_skip_login_falsy_values() {
    for value in ["0", "false", "no", "  "] {
        clear_env();
        std::env::set_var(SKIP_LOGIN_ENV, value);
        assert!(!StartupConfig::from_env().skip_login, "value {:?}", value);
    }
    clear_env();
}

#[test]
#[serial]
fn test_blank_url_falls_back_to_default() {
    clear_env();
    std::env::set_var(API_URL_ENV, "   ");
    let config = StartupConfig::from_env();
    clear_env();

    assert_eq!(config.api.base_url, DEFAULT_API_URL);
}

#[test]
#[serial]
fn test_cli_flag_beats_env() {
    clear_env();
    std::env::set_var(API_URL_ENV, "http://env.test/api");
    let config = StartupConfig::from_env().with_overrides(Some("http://cli.test/api"), false);
    clear_env();

    assert_eq!(config.api.base_url, "http://cli.test/api");
}

#[test]
#[serial]
fn test_invalid_env_url_fails_validation() {
    clear_env();
    std::env::set_var(API_URL_ENV, "ftp://chama.example.com");
    let config = StartupConfig::from_env();
    clear_env();

    let err = config.api.validate().unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}
