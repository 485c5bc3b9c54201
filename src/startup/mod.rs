//! Startup configuration and logging.
//!
//! - [`config`] - API and launch configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod logging;

pub use config::{
    default_log_file, ApiConfig, StartupConfig, API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT,
    LOG_FILE_ENV, SKIP_LOGIN_ENV,
};
pub use logging::{init_logging, open_log_file};
