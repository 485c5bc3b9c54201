//! Command-line interface.
//!
//! `main` parses arguments first; informational flags are answered here
//! and only `RunTui` continues into the terminal UI.
//!
//! ```ignore
//! use chama::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, RunOptions};
pub use version::{version_line, VERSION};

/// Handle informational commands.
///
/// Returns the exit code when the command was handled, `None` for `RunTui`.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, usage());
            Some(2)
        }
        CliCommand::RunTui(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(&CliCommand::RunTui(RunOptions::default())).is_none());
    }

    #[test]
    fn test_invalid_exit_code() {
        assert_eq!(
            run_cli_command(&CliCommand::Invalid("bad".to_string())),
            Some(2)
        );
    }
}
