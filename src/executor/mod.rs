//! Builds and runs `nebius` command lines.
//!
//! The executor prepends the global flags configured for the session, runs
//! the binary through a [`CommandRunner`], maps non-zero exit codes to
//! [`NebiusError::CommandExecution`], and optionally decodes stdout as JSON.

use std::ffi::OsString;
use std::fmt;

use serde_json::Value;

use crate::config::NebiusConfig;
use crate::error::NebiusError;
use crate::runner::{CommandOutput, CommandRunner, ProcessCommandRunner};

/// Program used to probe for the executable on the search path.
const PROBE_PROGRAM: &str = "which";

/// Output format requested through `--format`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Machine-readable JSON; the only format the executor decodes.
    #[default]
    Json,
    /// YAML text.
    Yaml,
    /// Human-oriented table.
    Table,
    /// Plain text.
    Text,
}

impl OutputFormat {
    /// Returns the token passed to `--format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Table => "table",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded result of a command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Response {
    /// Parsed JSON document.
    Json(Value),
    /// Raw stdout.
    Text(String),
}

impl Response {
    /// Returns the JSON value, rendering text responses as a JSON string.
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Returns stdout text, serialising JSON responses.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// Runs `nebius` subcommands with the session's global flags.
#[derive(Debug)]
pub struct Executor<R: CommandRunner> {
    config: NebiusConfig,
    runner: R,
}

impl Executor<ProcessCommandRunner> {
    /// Convenience constructor that wires the real process runner.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::ExecutableNotFound`] when the CLI is not
    /// installed, or [`NebiusError::InvalidConfig`] when validation fails.
    pub fn with_process_runner(config: NebiusConfig) -> Result<Self, NebiusError> {
        Self::new(config, ProcessCommandRunner)
    }
}

impl<R: CommandRunner> Executor<R> {
    /// Validates `config` and probes for the executable before returning.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::InvalidConfig`] for blank settings and
    /// [`NebiusError::ExecutableNotFound`] when the probe fails.
    pub fn new(config: NebiusConfig, runner: R) -> Result<Self, NebiusError> {
        config.validate()?;
        let executor = Self { config, runner };
        executor.check_availability()?;
        Ok(executor)
    }

    /// Profile passed as `--profile`, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.config.profile.as_deref()
    }

    /// Whether `--debug` is passed and command lines are logged.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.config.debug
    }

    /// Executable invoked for every command.
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.config.binary
    }

    /// Builds the argument vector that follows the binary name.
    ///
    /// The order is fixed: `--profile <p>` (when configured), `--format
    /// <format>`, `--debug` (when enabled), then `parts`.
    #[must_use]
    pub fn build_args(&self, parts: &[OsString], format: OutputFormat) -> Vec<OsString> {
        let mut args = Vec::with_capacity(parts.len() + 5);
        if let Some(profile) = self.profile() {
            args.push(OsString::from("--profile"));
            args.push(OsString::from(profile));
        }
        args.push(OsString::from("--format"));
        args.push(OsString::from(format.as_str()));
        if self.config.debug {
            args.push(OsString::from("--debug"));
        }
        args.extend_from_slice(parts);
        args
    }

    /// Renders the full command line, space separated.
    #[must_use]
    pub fn command_line(&self, args: &[OsString]) -> String {
        let mut line = self.config.binary.clone();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Runs `parts` and decodes the result.
    ///
    /// Stdout is parsed as JSON only when `parse_json` is set and `format` is
    /// [`OutputFormat::Json`]; empty stdout then yields an empty object.
    /// Otherwise stdout is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::CommandExecution`] on a non-zero exit,
    /// [`NebiusError::ResponseParse`] when JSON decoding fails, or
    /// [`NebiusError::Spawn`] when the process cannot start.
    pub fn execute(
        &self,
        parts: &[OsString],
        format: OutputFormat,
        parse_json: bool,
    ) -> Result<Response, NebiusError> {
        let output = self.run(parts, format)?;
        if parse_json && format == OutputFormat::Json {
            parse_json_output(&output.stdout).map(Response::Json)
        } else {
            Ok(Response::Text(output.stdout))
        }
    }

    /// Runs `parts` with JSON output and decodes stdout.
    ///
    /// # Errors
    ///
    /// See [`Executor::execute`].
    pub fn execute_json(&self, parts: &[OsString]) -> Result<Value, NebiusError> {
        let output = self.run(parts, OutputFormat::Json)?;
        parse_json_output(&output.stdout)
    }

    /// Runs `parts` and returns stdout verbatim.
    ///
    /// # Errors
    ///
    /// See [`Executor::execute`].
    pub fn execute_text(&self, parts: &[OsString]) -> Result<String, NebiusError> {
        self.run(parts, OutputFormat::Json)
            .map(|output| output.stdout)
    }

    fn run(&self, parts: &[OsString], format: OutputFormat) -> Result<CommandOutput, NebiusError> {
        let args = self.build_args(parts, format);
        let command = self.command_line(&args);
        if self.config.debug {
            tracing::info!(%command, "executing nebius command");
        } else {
            tracing::debug!(%command, "executing nebius command");
        }

        let output = self.runner.run(&self.config.binary, &args)?;
        if output.is_success() {
            return Ok(output);
        }

        tracing::warn!(%command, status = %output.status_text(), "nebius command failed");
        Err(NebiusError::CommandExecution {
            command,
            exit_code: output.code,
            status_text: output.status_text(),
            stderr: output.stderr,
        })
    }

    fn check_availability(&self) -> Result<(), NebiusError> {
        let args = [OsString::from(&self.config.binary)];
        let not_found = |message: String| NebiusError::ExecutableNotFound {
            program: self.config.binary.clone(),
            message,
        };
        let output = self
            .runner
            .run(PROBE_PROGRAM, &args)
            .map_err(|err| not_found(err.to_string()))?;
        if output.is_success() {
            tracing::debug!(binary = %self.config.binary, path = %output.stdout.trim(), "located nebius CLI");
            return Ok(());
        }
        Err(not_found(format!(
            "{PROBE_PROGRAM} exited with status {}",
            output.status_text()
        )))
    }
}

fn parse_json_output(stdout: &str) -> Result<Value, NebiusError> {
    if stdout.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(stdout).map_err(|err| NebiusError::ResponseParse {
        message: err.to_string(),
    })
}

/// Converts string slices into an owned argument vector.
pub(crate) fn to_args(parts: &[&str]) -> Vec<OsString> {
    parts.iter().map(OsString::from).collect()
}

#[cfg(test)]
mod tests;
