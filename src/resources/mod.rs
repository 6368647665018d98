//! Resource facades mapping typed calls onto `nebius` subcommands.
//!
//! Each family (`compute`, `storage`, `iam`, `vpc`, `mk8s`) owns one facade
//! per resource. Facades share a single [`Executor`] and perform no
//! validation; the CLI reports domain errors through its exit status.

use std::ffi::OsString;
use std::sync::Arc;

use crate::executor::Executor;
use crate::options::ExtraOptions;

pub mod compute;
pub mod iam;
pub mod mk8s;
pub mod storage;
pub mod vpc;

pub use compute::{Compute, Disk, DiskCreate, Image, Instance, InstanceCreate};
pub use iam::{Iam, Role, ServiceAccount, ServiceAccountCreate, User};
pub use mk8s::{Cluster, ClusterCreate, Mk8s, NodeGroup, NodeGroupCreate};
pub use storage::{Bucket, BucketCreate, Storage};
pub use vpc::{Network, NetworkCreate, Subnet, SubnetCreate, Vpc};

/// Executor handle shared by every facade of a client.
pub(crate) type SharedExecutor<R> = Arc<Executor<R>>;

/// Ordered argument list for a single subcommand.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CommandArgs {
    args: Vec<OsString>,
}

impl CommandArgs {
    /// Starts a command from a resource prefix and an action verb.
    pub(crate) fn new(prefix: &[&str], action: &str) -> Self {
        let mut args: Vec<OsString> = prefix.iter().map(OsString::from).collect();
        args.push(OsString::from(action));
        Self { args }
    }

    /// Appends a positional argument.
    pub(crate) fn arg(mut self, value: &str) -> Self {
        self.args.push(OsString::from(value));
        self
    }

    /// Appends `--name value`.
    pub(crate) fn flag(mut self, name: &str, value: &str) -> Self {
        self.args.push(OsString::from(format!("--{name}")));
        self.args.push(OsString::from(value));
        self
    }

    /// Appends `--name value` when `value` is present.
    pub(crate) fn optional_flag(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(present) => self.flag(name, present),
            None => self,
        }
    }

    /// Appends a bare `--name` when `enabled` is set.
    pub(crate) fn switch(mut self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.args.push(OsString::from(format!("--{name}")));
        }
        self
    }

    /// Appends caller-supplied extra flags in insertion order.
    pub(crate) fn options(mut self, options: &ExtraOptions) -> Self {
        options.append_to(&mut self.args);
        self
    }

    /// Returns the finished argument list.
    pub(crate) fn into_args(self) -> Vec<OsString> {
        self.args
    }
}
