//! GitHub Actions environment glue
//!
//! Inputs arrive as `INPUT_*` environment variables; outputs go to the
//! `GITHUB_OUTPUT` file when the runner provides one, or to stdout as legacy
//! `::set-output` workflow commands otherwise. The legacy framing (a blank
//! line, then `::set-output name=<name>::<escaped value>`) is what the
//! fixture harness splits on, so it is preserved exactly.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{CrosspostError, Result};

/// Read an action input, `None` when unset or blank.
///
/// The runner exposes input `foo bar` as `INPUT_FOO_BAR`; values are trimmed
/// the way the Actions toolkit trims them.
pub fn input(name: &str) -> Option<String> {
    let var = format!("INPUT_{}", name.to_uppercase().replace(' ', "_"));
    let value = std::env::var(var).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Read a required action input
pub fn required_input(name: &str) -> Result<String> {
    input(name).ok_or_else(|| CrosspostError::InputMissing {
        name: name.to_string(),
    })
}

/// Destination for action output values
#[derive(Debug)]
pub enum OutputSink {
    /// Append heredoc records to the `GITHUB_OUTPUT` file
    File(PathBuf),
    /// Emit legacy `::set-output` workflow commands on stdout
    LegacyStdout,
}

impl OutputSink {
    /// Pick the sink the current environment calls for
    pub fn from_env() -> Self {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::LegacyStdout,
        }
    }

    /// Publish one named output value
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match self {
            OutputSink::File(path) => {
                let record = file_record(name, value);
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| CrosspostError::OutputWriteFailed {
                        name: name.to_string(),
                        reason: e.to_string(),
                    })?;
                file.write_all(record.as_bytes()).map_err(|e| {
                    CrosspostError::OutputWriteFailed {
                        name: name.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(())
            }
            OutputSink::LegacyStdout => {
                println!();
                println!("{}", legacy_command(name, value));
                Ok(())
            }
        }
    }
}

/// Heredoc record appended to the `GITHUB_OUTPUT` file. The delimiter must
/// not occur in the value, so it is bumped until it doesn't.
fn file_record(name: &str, value: &str) -> String {
    let mut delimiter = "ghadelimiter".to_string();
    let mut counter = 0_u32;
    while value.contains(&delimiter) || name.contains(&delimiter) {
        counter += 1;
        delimiter = format!("ghadelimiter_{counter}");
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Legacy workflow command carrying an output value on stdout
fn legacy_command(name: &str, value: &str) -> String {
    format!("::set-output name={name}::{}", escape_data(value))
}

/// Actions-toolkit data escaping: `%`, carriage return and newline are
/// percent-encoded so the value fits on one command line
fn escape_data(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => escaped.push_str("%25"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }
    escaped
}
