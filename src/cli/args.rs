//! Command-line argument parsing.

/// Options that shape a TUI run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    /// `--api-url`, overriding `CHAMA_API_URL`
    pub api_url: Option<String>,
    /// `--skip-login`
    pub skip_login: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be parsed
    Invalid(String),
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments, program name first.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use chama::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chama".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--skip-login" => options.skip_login = true,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with("--") => options.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a URL".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    if url.is_empty() {
                        return CliCommand::Invalid("--api-url requires a URL".to_string());
                    }
                    options.api_url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::RunTui(options)
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "chama {}\n\
         A terminal client for chama savings groups\n\n\
         USAGE:\n    chama [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --api-url <URL>   API base URL (env: CHAMA_API_URL, default: {})\n\
         \x20   --skip-login      Start on the main tabs (env: CHAMA_SKIP_LOGIN)\n\
         \x20   -V, --version     Print version\n\
         \x20   -h, --help        Print this help\n",
        super::VERSION,
        crate::startup::DEFAULT_API_URL
    )
}
