//! JSON output for the CLI
//!
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::io::{self, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Builds a success envelope
pub fn ok_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Builds an error envelope; details are included when present
pub fn error_envelope(error: &CliError) -> Value {
    let mut response = serde_json::json!({
        "status": "error",
        "code": error.code_str(),
        "message": error.message()
    });
    if let (Some(details), Some(obj)) = (error.details(), response.as_object_mut()) {
        obj.insert("details".into(), details.clone());
    }
    response
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(error: &CliError) -> CliResult<()> {
    write_json(&error_envelope(error))
}

fn write_json(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
