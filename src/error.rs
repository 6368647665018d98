//! Error types surfaced by the `nebius` wrapper.

use thiserror::Error;

/// Errors raised while locating, invoking, or decoding the `nebius` CLI.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NebiusError {
    /// Raised when the executable cannot be located on the search path.
    #[error("{program} CLI not found, please install it first: {message}")]
    ExecutableNotFound {
        /// Executable that was probed.
        program: String,
        /// Output of the failed probe.
        message: String,
    },
    /// Raised when the CLI exits with a non-zero status.
    #[error(
        "command failed: {stderr} (command: {command}) (exit code: {status_text})"
    )]
    CommandExecution {
        /// Full command line, space separated.
        command: String,
        /// Exit status as reported by the OS.
        exit_code: Option<i32>,
        /// Human readable representation of the exit status.
        status_text: String,
        /// Stderr captured from the process.
        stderr: String,
    },
    /// Raised when JSON output cannot be decoded.
    #[error("failed to parse JSON output: {message}")]
    ResponseParse {
        /// Parser error message.
        message: String,
    },
    /// Raised when a command cannot be spawned.
    #[error("failed to spawn {program}: {message}")]
    Spawn {
        /// Command that failed to start.
        program: String,
        /// Operating system error string.
        message: String,
    },
    /// Raised when configuration is missing required values.
    #[error("invalid nebius configuration: blank {field}")]
    InvalidConfig {
        /// Configuration field that failed validation.
        field: String,
    },
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Config(String),
}

impl NebiusError {
    /// Returns the command line that failed, when one was executed.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::CommandExecution { command, .. } => Some(command),
            _ => None,
        }
    }

    /// Returns the exit code reported by a failed command.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandExecution { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Returns the stderr captured from a failed command.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandExecution { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

impl From<ortho_config::OrthoError> for NebiusError {
    fn from(value: ortho_config::OrthoError) -> Self {
        Self::Config(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn command_execution_exposes_failure_details() {
        let err = NebiusError::CommandExecution {
            command: String::from("nebius --format json compute instance list"),
            exit_code: Some(3),
            status_text: String::from("3"),
            stderr: String::from("permission denied"),
        };

        assert_eq!(
            err.command(),
            Some("nebius --format json compute instance list")
        );
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(err.stderr(), Some("permission denied"));
        let rendered = err.to_string();
        assert!(rendered.contains("permission denied"), "rendered: {rendered}");
        assert!(rendered.contains("exit code: 3"), "rendered: {rendered}");
    }

    #[rstest]
    #[case(NebiusError::ResponseParse { message: String::from("eof") })]
    #[case(NebiusError::ExecutableNotFound {
        program: String::from("nebius"),
        message: String::new(),
    })]
    fn other_variants_carry_no_command_details(#[case] err: NebiusError) {
        assert_eq!(err.command(), None);
        assert_eq!(err.exit_code(), None);
        assert_eq!(err.stderr(), None);
    }
}
