//! Command-line interface.
//!
//! Called early in `main()`, before the terminal is taken over:
//!
//! ```ignore
//! use stride::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(());
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions, USAGE};
pub use version::{version_line, VERSION};

/// Handle commands that print and exit.
///
/// Returns the TUI options for `RunTui`, `None` when the command was
/// handled here.
pub fn run_cli_command(command: CliCommand) -> Option<CliOptions> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            None
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::RunTui(options) => Some(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_passes_options_through() {
        let options = CliOptions {
            demo: true,
            ..CliOptions::default()
        };
        assert_eq!(
            run_cli_command(CliCommand::RunTui(options.clone())),
            Some(options)
        );
    }

    #[test]
    fn test_version_is_handled() {
        assert!(run_cli_command(CliCommand::Version).is_none());
    }
}
