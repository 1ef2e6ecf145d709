//! CLI argument definitions using clap
//!
//! Commands:
//! - uddf validate <FILE>
//! - uddf summary <FILE>

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// uddf - decode and validate UDDF dive logs
#[derive(Parser, Debug)]
#[command(name = "uddf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Diagnostics written as JSON lines to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a document and check it against the rule table
    Validate {
        /// Path to the UDDF file
        file: PathBuf,
    },

    /// Decode a document and print an overview of its content
    Summary {
        /// Path to the UDDF file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_with_default_level() {
        let cli = Cli::try_parse_from(["uddf", "validate", "dive.uddf"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
        match cli.command {
            Command::Validate { file } => assert_eq!(file, PathBuf::from("dive.uddf")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_log_level_after_subcommand() {
        let cli =
            Cli::try_parse_from(["uddf", "summary", "dive.uddf", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.to_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["uddf", "validate"]).is_err());
    }
}
