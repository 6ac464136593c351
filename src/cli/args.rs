//! Command-line argument parsing.
//!
//! ```text
//! stride [--demo] [--api-url URL] [--page-size N]
//! stride --version | --help
//! ```

use thiserror::Error;

/// Flags that adjust the TUI run. Unset flags leave the config alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub demo: bool,
    pub api_url: Option<String>,
    pub page_size: Option<usize>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("unknown argument '{0}'")]
    Unknown(String),
    #[error("{0} needs a value")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
}

pub const USAGE: &str = "\
Usage: stride [OPTIONS]

Options:
      --demo             Use the built-in demo feed
      --api-url <URL>    Feed API base URL
      --page-size <N>    Posts per page (1-100)
  -V, --version          Print version
  -h, --help             Print help";

/// Parse command-line arguments, skipping the program name.
///
/// ```
/// use stride::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stride".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // Accept both "--flag value" and "--flag=value"
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--demo" => options.demo = true,
            "--api-url" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or(ArgsError::MissingValue("--api-url"))?;
                options.api_url = Some(value);
            }
            "--page-size" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or(ArgsError::MissingValue("--page-size"))?;
                let size = value
                    .parse::<usize>()
                    .map_err(|_| ArgsError::InvalidValue {
                        flag: "--page-size",
                        value: value.clone(),
                    })?;
                options.page_size = Some(size);
            }
            _ => return Err(ArgsError::Unknown(flag)),
        }
    }

    Ok(CliCommand::RunTui(options))
}
