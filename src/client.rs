//! Top-level entry point bundling the executor and every resource facade.

use std::ffi::OsString;
use std::sync::Arc;

use crate::config::NebiusConfig;
use crate::error::NebiusError;
use crate::executor::{Executor, to_args};
use crate::profile::{Profile, parse_profile_list};
use crate::resources::{Compute, Iam, Mk8s, Storage, Vpc};
use crate::runner::{CommandRunner, ProcessCommandRunner};

/// Client for the `nebius` CLI.
///
/// Construction probes for the executable, so a client only exists when the
/// CLI is installed. Resource facades are built once alongside the client and
/// every accessor returns the same instance.
#[derive(Debug)]
pub struct NebiusClient<R: CommandRunner = ProcessCommandRunner> {
    executor: Arc<Executor<R>>,
    compute: Compute<R>,
    storage: Storage<R>,
    iam: Iam<R>,
    vpc: Vpc<R>,
    mk8s: Mk8s<R>,
}

impl NebiusClient<ProcessCommandRunner> {
    /// Creates a client that shells out to the host's `nebius` binary.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::ExecutableNotFound`] when the CLI is missing or
    /// [`NebiusError::InvalidConfig`] when validation fails.
    pub fn new(config: NebiusConfig) -> Result<Self, NebiusError> {
        Self::with_runner(config, ProcessCommandRunner)
    }

    /// Loads [`NebiusConfig`] from files and `NEBIUS_*` variables, then
    /// creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::Config`] when loading fails, or any error from
    /// [`NebiusClient::new`].
    pub fn from_env() -> Result<Self, NebiusError> {
        Self::new(NebiusConfig::load_without_cli_args()?)
    }
}

impl<R: CommandRunner> NebiusClient<R> {
    /// Creates a client using the provided runner.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError::ExecutableNotFound`] when the probe fails or
    /// [`NebiusError::InvalidConfig`] when validation fails.
    pub fn with_runner(config: NebiusConfig, runner: R) -> Result<Self, NebiusError> {
        let executor = Arc::new(Executor::new(config, runner)?);
        Ok(Self {
            compute: Compute::new(&executor),
            storage: Storage::new(&executor),
            iam: Iam::new(&executor),
            vpc: Vpc::new(&executor),
            mk8s: Mk8s::new(&executor),
            executor,
        })
    }

    /// Underlying command executor.
    #[must_use]
    pub fn executor(&self) -> &Executor<R> {
        &self.executor
    }

    /// Profile passed to every command, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.executor.profile()
    }

    /// Whether debug mode is enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.executor.debug()
    }

    /// Compute instances, disks, and images.
    #[must_use]
    pub const fn compute(&self) -> &Compute<R> {
        &self.compute
    }

    /// Object storage buckets.
    #[must_use]
    pub const fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// IAM users, service accounts, and roles.
    #[must_use]
    pub const fn iam(&self) -> &Iam<R> {
        &self.iam
    }

    /// Networks and subnets.
    #[must_use]
    pub const fn vpc(&self) -> &Vpc<R> {
        &self.vpc
    }

    /// Managed Kubernetes clusters and node groups.
    #[must_use]
    pub const fn mk8s(&self) -> &Mk8s<R> {
        &self.mk8s
    }

    /// Returns the CLI's version string with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails.
    pub fn version(&self) -> Result<String, NebiusError> {
        self.executor
            .execute_text(&to_args(&["version"]))
            .map(|output| output.trim().to_owned())
    }

    /// Lists configured CLI profiles in the order the CLI prints them.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails.
    pub fn profiles(&self) -> Result<Vec<Profile>, NebiusError> {
        let output = self.executor.execute_text(&to_args(&["profile", "list"]))?;
        Ok(parse_profile_list(&output))
    }

    /// Creates a CLI profile under `parent_id` and returns the CLI's output.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails.
    pub fn create_profile(
        &self,
        parent_id: &str,
        name: Option<&str>,
    ) -> Result<String, NebiusError> {
        let mut args = to_args(&["profile", "create", "--parent-id", parent_id]);
        if let Some(profile_name) = name {
            args.push(OsString::from("--name"));
            args.push(OsString::from(profile_name));
        }
        self.executor.execute_text(&args)
    }
}
