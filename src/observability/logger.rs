//! Structured JSON logger
//!
//! - One log line = one record
//! - `event` first, then `severity`, then the remaining fields sorted by key
//! - ERROR goes to stderr; the rest goes to stdout unless the sink is
//!   [`Sink::Stderr`]
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Fine-grained tracing
    Trace = 0,
    /// Diagnostic detail
    Debug = 1,
    /// Normal operations
    Info = 2,
    /// Recoverable issues
    Warn = 3,
    /// Operation failures
    Error = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// True for severities routed to stderr
    pub fn is_error(&self) -> bool {
        *self >= Severity::Error
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => Severity::Trace,
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warn,
            Level::Error => Severity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where non-error records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// ERROR to stderr, everything else to stdout
    Split,
    /// Every record to stderr; stdout stays free for program output
    Stderr,
}

/// Output stream chosen for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A `log` backend that writes JSON lines
pub struct Logger {
    level: LevelFilter,
    sink: Sink,
}

impl Logger {
    pub const fn new(level: LevelFilter, sink: Sink) -> Self {
        Self { level, sink }
    }

    pub fn sink(&self) -> Sink {
        self.sink
    }

    /// Stream a record of the given severity is written to.
    pub fn stream_for(&self, severity: Severity) -> Stream {
        match self.sink {
            Sink::Stderr => Stream::Stderr,
            Sink::Split if severity.is_error() => Stream::Stderr,
            Sink::Split => Stream::Stdout,
        }
    }

    /// Renders one log line. Fields are output in alphabetical key order.
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(256);

        output.push('{');

        output.push_str("\"event\":\"");
        escape_json_string(&mut output, event);
        output.push('"');

        output.push_str(",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            escape_json_string(&mut output, key);
            output.push_str("\":\"");
            escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');
        output.push('\n');
        output
    }

    fn write_line<W: Write>(line: &str, writer: &mut W) {
        // Write atomically (one syscall)
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let severity = Severity::from(record.level());
        let message = record.args().to_string();
        let mut fields = vec![("message", message.as_str())];
        if let Some(module) = record.module_path() {
            fields.push(("module", module));
        }

        let line = Self::render(severity, record.target(), &fields);
        match self.stream_for(severity) {
            Stream::Stderr => Self::write_line(&line, &mut io::stderr()),
            Stream::Stdout => Self::write_line(&line, &mut io::stdout()),
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}
