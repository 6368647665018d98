//! Command-line interface definitions for the `nebius-rs` binary.
//!
//! This module centralises the clap parser structures so both the main binary
//! and the build script can reuse them when generating the manual page.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI for the `nebius-rs` binary.
#[derive(Debug, Parser)]
#[command(
    name = "nebius-rs",
    about = "Query and manage Nebius cloud resources through the nebius CLI",
    arg_required_else_help = true
)]
pub(crate) struct Cli {
    /// Named nebius CLI profile to use for every command.
    #[arg(long, global = true, value_name = "PROFILE")]
    pub(crate) profile: Option<String>,
    /// Pass `--debug` to the nebius CLI and log each command line.
    #[arg(long, global = true)]
    pub(crate) debug: bool,
    /// Operation to perform.
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Supported operations.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the nebius CLI version.
    #[command(name = "version")]
    Version,
    /// List configured profiles, marking the active one.
    #[command(name = "profiles")]
    Profiles,
    /// Create a profile under a parent tenant or project.
    #[command(name = "create-profile")]
    CreateProfile(CreateProfileCommand),
    /// List resources of one kind as JSON.
    #[command(name = "list")]
    List(ListCommand),
    /// Fetch one resource as JSON.
    #[command(name = "get")]
    Get(GetCommand),
    /// Print kubeconfig credentials for a managed Kubernetes cluster.
    #[command(name = "credentials")]
    Credentials(CredentialsCommand),
}

/// Resource kinds addressable from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum ResourceKind {
    /// Compute instances.
    Instance,
    /// Compute disks.
    Disk,
    /// Compute images.
    Image,
    /// Storage buckets.
    Bucket,
    /// IAM users.
    User,
    /// IAM service accounts.
    ServiceAccount,
    /// IAM roles.
    Role,
    /// VPC networks.
    Network,
    /// VPC subnets.
    Subnet,
    /// Managed Kubernetes clusters.
    Cluster,
    /// Managed Kubernetes node groups (requires `--cluster`).
    NodeGroup,
}

/// Arguments for `nebius-rs create-profile`.
#[derive(Debug, Parser)]
pub(crate) struct CreateProfileCommand {
    /// Parent tenant or project identifier.
    #[arg(long, value_name = "ID")]
    pub(crate) parent_id: String,
    /// Name for the new profile.
    #[arg(long, value_name = "NAME")]
    pub(crate) name: Option<String>,
}

/// Arguments for `nebius-rs list`.
#[derive(Debug, Parser)]
pub(crate) struct ListCommand {
    /// Kind of resource to list.
    #[arg(value_enum)]
    pub(crate) resource: ResourceKind,
    /// Cluster that owns the node groups.
    #[arg(long, value_name = "CLUSTER")]
    pub(crate) cluster: Option<String>,
}

/// Arguments for `nebius-rs get`.
#[derive(Debug, Parser)]
pub(crate) struct GetCommand {
    /// Kind of resource to fetch.
    #[arg(value_enum)]
    pub(crate) resource: ResourceKind,
    /// Resource name or identifier.
    pub(crate) id: String,
    /// Cluster that owns the node group.
    #[arg(long, value_name = "CLUSTER")]
    pub(crate) cluster: Option<String>,
}

/// Arguments for `nebius-rs credentials`.
#[derive(Debug, Parser)]
pub(crate) struct CredentialsCommand {
    /// Cluster name.
    pub(crate) cluster: String,
}
