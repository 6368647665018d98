//! Rust bindings for the `nebius` cloud CLI.
//!
//! Every operation assembles an argument list, runs the `nebius` executable
//! as a subprocess, and decodes its output. [`NebiusClient`] is the entry
//! point; it exposes one facade per resource family (compute, storage, IAM,
//! VPC, managed Kubernetes) alongside profile and version queries.

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod options;
pub mod profile;
pub mod resources;
pub mod runner;
pub mod test_support;

pub use client::NebiusClient;
pub use config::{DEFAULT_BINARY, NebiusConfig};
pub use error::NebiusError;
pub use executor::{Executor, OutputFormat, Response};
pub use options::ExtraOptions;
pub use profile::{DEFAULT_MARKER, Profile, parse_profile_list};
pub use runner::{CommandOutput, CommandRunner, ProcessCommandRunner};
