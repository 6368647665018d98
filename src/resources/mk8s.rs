//! Managed Kubernetes clusters and node groups.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NebiusError;
use crate::options::ExtraOptions;
use crate::runner::CommandRunner;

use super::{CommandArgs, SharedExecutor};

const CLUSTER: &[&str] = &["mk8s", "cluster"];
const NODE_GROUP: &[&str] = &["mk8s", "node-group"];

/// Default lower bound for node-group autoscaling.
pub const DEFAULT_MIN_SIZE: u32 = 1;
/// Default upper bound for node-group autoscaling.
pub const DEFAULT_MAX_SIZE: u32 = 3;

/// Managed Kubernetes family facade.
#[derive(Debug)]
pub struct Mk8s<R: CommandRunner> {
    cluster: Cluster<R>,
    node_group: NodeGroup<R>,
}

impl<R: CommandRunner> Mk8s<R> {
    pub(crate) fn new(executor: &SharedExecutor<R>) -> Self {
        Self {
            cluster: Cluster {
                executor: Arc::clone(executor),
            },
            node_group: NodeGroup {
                executor: Arc::clone(executor),
            },
        }
    }

    /// Kubernetes clusters.
    #[must_use]
    pub const fn cluster(&self) -> &Cluster<R> {
        &self.cluster
    }

    /// Node groups, always scoped to a cluster.
    #[must_use]
    pub const fn node_group(&self) -> &NodeGroup<R> {
        &self.node_group
    }
}

/// Parameters for `mk8s cluster create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterCreate {
    name: String,
    version: String,
    network: String,
    subnet: String,
    options: ExtraOptions,
}

impl ClusterCreate {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        network: impl Into<String>,
        subnet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            network: network.into(),
            subnet: subnet.into(),
            options: ExtraOptions::new(),
        }
    }

    /// Adds an extra `--key value` flag.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Replaces all extra flags.
    #[must_use]
    pub fn options(mut self, options: ExtraOptions) -> Self {
        self.options = options;
        self
    }
}

/// Parameters for `mk8s node-group create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeGroupCreate {
    name: String,
    cluster: String,
    machine_type: String,
    min_size: u32,
    max_size: u32,
    options: ExtraOptions,
}

impl NodeGroupCreate {
    /// Creates a request sized between [`DEFAULT_MIN_SIZE`] and
    /// [`DEFAULT_MAX_SIZE`] nodes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cluster: impl Into<String>,
        machine_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cluster: cluster.into(),
            machine_type: machine_type.into(),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--min-size`.
    #[must_use]
    pub const fn min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Sets `--max-size`.
    #[must_use]
    pub const fn max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Adds an extra `--key value` flag.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Replaces all extra flags.
    #[must_use]
    pub fn options(mut self, options: ExtraOptions) -> Self {
        self.options = options;
        self
    }
}

/// `nebius mk8s cluster` commands.
#[derive(Debug)]
pub struct Cluster<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Cluster<R> {
    /// Lists clusters.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(CLUSTER, "list").into_args())
    }

    /// Fetches one cluster.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(CLUSTER, "get").arg(name).into_args())
    }

    /// Creates a cluster.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &ClusterCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(CLUSTER, "create")
            .arg(&request.name)
            .flag("version", &request.version)
            .flag("network", &request.network)
            .flag("subnet", &request.subnet)
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a cluster.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(CLUSTER, "delete").arg(name).into_args())
    }

    /// Returns kubeconfig content for the cluster as raw text.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails.
    pub fn get_credentials(&self, name: &str) -> Result<String, NebiusError> {
        self.executor.execute_text(
            &CommandArgs::new(CLUSTER, "get-credentials")
                .arg(name)
                .into_args(),
        )
    }
}

/// `nebius mk8s node-group` commands.
#[derive(Debug)]
pub struct NodeGroup<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> NodeGroup<R> {
    /// Lists node groups of `cluster`.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self, cluster: &str) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(NODE_GROUP, "list").flag("cluster", cluster);
        self.executor.execute_json(&args.into_args())
    }

    /// Fetches one node group of `cluster`.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str, cluster: &str) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(NODE_GROUP, "get")
            .arg(name)
            .flag("cluster", cluster);
        self.executor.execute_json(&args.into_args())
    }

    /// Creates a node group.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &NodeGroupCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(NODE_GROUP, "create")
            .arg(&request.name)
            .flag("cluster", &request.cluster)
            .flag("machine-type", &request.machine_type)
            .flag("min-size", &request.min_size.to_string())
            .flag("max-size", &request.max_size.to_string())
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a node group of `cluster`.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str, cluster: &str) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(NODE_GROUP, "delete")
            .arg(name)
            .flag("cluster", cluster);
        self.executor.execute_json(&args.into_args())
    }
}
