//! CLI command implementations
//!
//! Each command decodes one file and produces the `data` object of the
//! JSON response. Failures become error responses with the library's
//! error code.

use std::path::Path;

use serde_json::{json, Value};

use crate::decode::decode_from_path;
use crate::model::Uddf;
use crate::observability::{self, Sink};
use crate::validation::validate;

use super::args::{Cli, Command, LogLevel};
use super::errors::CliResult;
use super::io::{write_error, write_response};

/// Diagnostics go to stderr so stdout carries exactly one JSON response.
pub const DIAGNOSTICS_SINK: Sink = Sink::Stderr;

/// Main CLI entry point
///
/// Parses arguments, installs the JSON logger and dispatches to the
/// appropriate command. This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    install_logging(cli.log_level);

    match run_command(cli.command).and_then(write_response) {
        Ok(()) => Ok(()),
        Err(e) => {
            write_error(&e)?;
            Err(e)
        }
    }
}

/// Installs the JSON logger on stderr at the requested level.
pub fn install_logging(level: LogLevel) -> bool {
    observability::init(level.to_filter(), DIAGNOSTICS_SINK)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Validate { file } => validate_file(&file),
        Command::Summary { file } => summarize_file(&file),
    }
}

/// Decodes and validates a file.
///
/// A document that breaks any rule is an error carrying every violation.
pub fn validate_file(path: &Path) -> CliResult<Value> {
    let document = decode_from_path(path)?;
    validate(Some(&document)).into_result()?;

    Ok(json!({
        "file": path.display().to_string(),
        "version": document.version,
        "valid": true,
    }))
}

/// Decodes a file and describes its content.
pub fn summarize_file(path: &Path) -> CliResult<Value> {
    let document = decode_from_path(path)?;
    let mut data = summarize(&document);
    if let Some(obj) = data.as_object_mut() {
        obj.insert("file".into(), json!(path.display().to_string()));
    }
    Ok(data)
}

/// Counts and identifiers of a decoded document
pub fn summarize(document: &Uddf) -> Value {
    let generator = document.generator.as_ref().and_then(|g| g.name.clone());
    let repetition_groups = document
        .profile_data
        .as_ref()
        .map_or(0, |p| p.repetition_groups.len());
    let waypoints: usize = document.dives().map(|d| d.waypoints().len()).sum();
    let gases: Vec<Value> = document
        .mixes()
        .iter()
        .map(|mix| {
            json!({
                "id": mix.id,
                "name": mix.name,
                "o2": mix.o2,
                "n2": mix.nitrogen_fraction(),
                "he": mix.he,
            })
        })
        .collect();
    let first_dive = document.dives().filter_map(|d| d.datetime()).min();
    let last_dive = document.dives().filter_map(|d| d.datetime()).max();

    json!({
        "version": document.version,
        "generator": generator,
        "mixes": document.mixes().len(),
        "gases": gases,
        "repetition_groups": repetition_groups,
        "dives": document.dives().count(),
        "waypoints": waypoints,
        "first_dive": first_dive.map(|t| t.to_string()),
        "last_dive": last_dive.map(|t| t.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::{Logger, Severity, Stream};
    use log::LevelFilter;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"<uddf version="3.2.3">
  <generator><name>unit</name></generator>
  <diver><owner id="me"/></diver>
  <gasdefinitions>
    <mix id="air"><name>Air</name><o2>0.21</o2><n2>0.79</n2></mix>
  </gasdefinitions>
  <profiledata>
    <repetitiongroup id="rg1">
      <dive id="d1">
        <informationbeforedive><datetime>2023-06-21T10:00:00Z</datetime></informationbeforedive>
        <samples>
          <waypoint><depth>0</depth><divetime>0</divetime></waypoint>
          <waypoint><depth>12.5</depth><divetime>60</divetime></waypoint>
        </samples>
      </dive>
    </repetitiongroup>
  </profiledata>
</uddf>"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_validate_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "valid.uddf", VALID);
        let data = validate_file(&path).unwrap();
        assert_eq!(data["valid"], true);
        assert_eq!(data["version"], "3.2.3");
    }

    #[test]
    fn test_validate_reports_violations() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.uddf", &VALID.replace("0.21", "1.5"));
        let err = validate_file(&path).unwrap_err();
        assert_eq!(err.code_str(), "UDDF_VALIDATION_FAILED");
        let violations = &err.details().unwrap()["violations"];
        assert_eq!(violations[0]["path"], "uddf.gasdefinitions.mix[0].o2");
    }

    #[test]
    fn test_missing_file_is_resource_access() {
        let dir = TempDir::new().unwrap();
        let err = validate_file(&dir.path().join("absent.uddf")).unwrap_err();
        assert_eq!(err.code_str(), "UDDF_RESOURCE_ACCESS");
    }

    #[test]
    fn test_summary_counts() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "valid.uddf", VALID);
        let data = summarize_file(&path).unwrap();
        assert_eq!(data["generator"], "unit");
        assert_eq!(data["mixes"], 1);
        assert_eq!(data["repetition_groups"], 1);
        assert_eq!(data["dives"], 1);
        assert_eq!(data["waypoints"], 2);
        assert_eq!(data["first_dive"], "2023-06-21T10:00:00+00:00");
    }

    #[test]
    fn test_summary_reports_implied_nitrogen() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "no_n2.uddf", &VALID.replace("<n2>0.79</n2>", ""));
        let data = summarize_file(&path).unwrap();
        let gas = &data["gases"][0];
        assert_eq!(gas["id"], "air");
        let n2 = gas["n2"].as_f64().unwrap();
        assert!((n2 - 0.79).abs() < 1e-9);
        assert!(gas["he"].is_null());
    }

    #[test]
    fn test_diagnostics_never_share_stdout_with_response() {
        let logger = Logger::new(LevelFilter::Trace, DIAGNOSTICS_SINK);
        assert_eq!(logger.stream_for(Severity::Warn), Stream::Stderr);
        assert_eq!(logger.stream_for(Severity::Info), Stream::Stderr);
    }

    #[test]
    fn test_install_logging_uses_stderr_sink() {
        install_logging(LogLevel::Info);
        assert_eq!(observability::installed_sink(), Some(Sink::Stderr));
    }
}
