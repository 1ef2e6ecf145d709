//! CLI module
//!
//! Provides command-line interface for:
//! - validate: decode a file and check it against the rule table
//! - summary: decode a file and describe its content

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, LogLevel};
pub use commands::{run, run_command, summarize, summarize_file, validate_file};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_error, write_response};
