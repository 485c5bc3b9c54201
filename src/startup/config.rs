//! Startup configuration types.
//!
//! [`ApiConfig`] describes the remote endpoint; [`StartupConfig`] bundles it
//! with the flags the binary needs to launch the TUI. Both are assembled from
//! the environment first, then overridden by command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ChamaError, ChamaResult};

/// Base URL used when `CHAMA_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Request timeout applied to every API operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CHAMA_API_URL";

/// Environment variable that starts the app on the main tabs.
pub const SKIP_LOGIN_ENV: &str = "CHAMA_SKIP_LOGIN";

/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "CHAMA_LOG_FILE";

/// Connection settings for the chama API.
///
/// # Example
///
/// ```ignore
/// use chama::startup::ApiConfig;
///
/// let config = ApiConfig::default().with_base_url("https://chama.example.com/api/");
/// assert_eq!(config.base_url, "https://chama.example.com/api");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are trimmed.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&url.into());
        self
    }

    /// Override the request timeout. Only tests should need this.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create config from `CHAMA_API_URL`, falling back to the default URL.
    pub fn from_env() -> Self {
        match non_empty_env(API_URL_ENV) {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    /// The base URL must be an absolute http(s) URL.
    pub fn validate(&self) -> ChamaResult<()> {
        let rest = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"))
            .ok_or_else(|| {
                ChamaError::Config(format!(
                    "API URL must start with http:// or https://, got '{}'",
                    self.base_url
                ))
            })?;
        if rest.is_empty() {
            return Err(ChamaError::Config("API URL has no host".to_string()));
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration for launching the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// API connection settings
    pub api: ApiConfig,
    /// Start on the main tabs instead of the login screen
    pub skip_login: bool,
    /// Where to write logs; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            skip_login: false,
            log_file: default_log_file(),
        }
    }
}

impl StartupConfig {
    /// Create a new StartupConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the API settings.
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Set whether to skip the login screen.
    pub fn with_skip_login(mut self, skip: bool) -> Self {
        self.skip_login = skip;
        self
    }

    /// Set the log file location.
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Create config from `CHAMA_API_URL`, `CHAMA_SKIP_LOGIN` and `CHAMA_LOG_FILE`.
    pub fn from_env() -> Self {
        let skip_login = non_empty_env(SKIP_LOGIN_ENV)
            .map(|v| !matches!(v.trim(), "0" | "false" | "no"))
            .unwrap_or(false);

        let log_file = non_empty_env(LOG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(default_log_file);

        Self::default()
            .with_api(ApiConfig::from_env())
            .with_skip_login(skip_login)
            .with_log_file(log_file)
    }

    /// Apply command-line overrides; flags win over the environment.
    pub fn with_overrides(mut self, api_url: Option<&str>, skip_login: bool) -> Self {
        if let Some(url) = api_url {
            self.api = self.api.with_base_url(url);
        }
        self.skip_login |= skip_login;
        self
    }
}

/// `<data dir>/chama/chama.log`, if the platform has a data directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("chama").join("chama.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_api_config_builder() {
        let config = ApiConfig::new()
            .with_base_url("https://chama.example.com/api//")
            .with_timeout(Duration::from_millis(200));

        assert_eq!(config.base_url, "https://chama.example.com/api");
        assert_eq!(config.timeout, Duration::from_millis(200));
    }

    #[test]
    fn test_startup_config_builder() {
        let config = StartupConfig::new()
            .with_skip_login(true)
            .with_log_file(None)
            .with_api(ApiConfig::default().with_base_url("http://10.0.0.2:5000/api"));

        assert!(config.skip_login);
        assert!(config.log_file.is_none());
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000/api");
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = StartupConfig::new()
            .with_api(ApiConfig::default().with_base_url("http://env.test/api"))
            .with_overrides(Some("http://cli.test/api/"), true);

        assert_eq!(config.api.base_url, "http://cli.test/api");
        assert!(config.skip_login);

        let unchanged = StartupConfig::new()
            .with_skip_login(true)
            .with_overrides(None, false);
        assert!(unchanged.skip_login);
        assert_eq!(unchanged.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_validate_base_url() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(ApiConfig::default()
            .with_base_url("https://chama.example.com/api")
            .validate()
            .is_ok());

        let err = ApiConfig::default()
            .with_base_url("chama.example.com")
            .validate()
            .unwrap_err();
        assert_eq!(err.error_code(), "E_CONFIG");
        assert!(ApiConfig::default()
            .with_base_url("http://")
            .validate()
            .is_err());
    }

    #[test]
    fn test_default_log_file_name() {
        if let Some(path) = default_log_file() {
            assert!(path.ends_with("chama/chama.log"));
        }
    }
}
