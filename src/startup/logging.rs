//! Log initialisation.
//!
//! stdout belongs to the TUI, so logs go to a file. The filter comes from
//! `RUST_LOG` and defaults to `chama=info`.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "chama=info";

/// Open (creating parent directories) the log file in append mode.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// Returns `false` when the file can't be opened or a subscriber is already
/// installed; the app then runs without logs.
pub fn init_logging(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("chama {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
    installed
}
