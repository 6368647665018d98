//! Configuration loading via `ortho-config`.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::NebiusError;

/// Default name of the Nebius CLI executable.
pub const DEFAULT_BINARY: &str = "nebius";

/// Session settings applied to every CLI invocation.
///
/// Values merge defaults, configuration files, and `NEBIUS_*` environment
/// variables.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(
    prefix = "NEBIUS",
    discovery(
        app_name = "nebius-rs",
        env_var = "NEBIUS_RS_CONFIG_PATH",
        config_file_name = "nebius-rs.toml",
        dotfile_name = ".nebius-rs.toml",
        project_file_name = "nebius-rs.toml"
    )
)]
pub struct NebiusConfig {
    /// Path or name of the `nebius` executable.
    #[ortho_config(default = DEFAULT_BINARY.to_owned())]
    pub binary: String,
    /// Named CLI profile passed as `--profile`.
    pub profile: Option<String>,
    /// Passes `--debug` to the CLI and logs each command line.
    #[ortho_config(default = false)]
    pub debug: bool,
}

impl Default for NebiusConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_owned(),
            profile: None,
            debug: false,
        }
    }
}

impl NebiusConfig {
    /// Builds a configuration for the named profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Enables or disables debug mode.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Overrides the executable used for every invocation.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Loads configuration without attempting to parse CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::Config`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, NebiusError> {
        Self::load_from_iter([std::ffi::OsString::from("nebius-rs")])
            .map_err(|err| NebiusError::Config(err.to_string()))
    }

    /// Ensures the binary is set and a configured profile is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), NebiusError> {
        if self.binary.trim().is_empty() {
            return Err(NebiusError::InvalidConfig {
                field: String::from("binary"),
            });
        }
        match self.profile.as_deref() {
            Some(profile) if profile.trim().is_empty() => Err(NebiusError::InvalidConfig {
                field: String::from("profile"),
            }),
            _ => Ok(()),
        }
    }
}
