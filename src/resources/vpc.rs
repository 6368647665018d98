//! Virtual networks and subnets.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NebiusError;
use crate::options::ExtraOptions;
use crate::runner::CommandRunner;

use super::{CommandArgs, SharedExecutor};

const NETWORK: &[&str] = &["vpc", "network"];
const SUBNET: &[&str] = &["vpc", "subnet"];

/// VPC family facade.
#[derive(Debug)]
pub struct Vpc<R: CommandRunner> {
    network: Network<R>,
    subnet: Subnet<R>,
}

impl<R: CommandRunner> Vpc<R> {
    pub(crate) fn new(executor: &SharedExecutor<R>) -> Self {
        Self {
            network: Network {
                executor: Arc::clone(executor),
            },
            subnet: Subnet {
                executor: Arc::clone(executor),
            },
        }
    }

    /// Virtual networks.
    #[must_use]
    pub const fn network(&self) -> &Network<R> {
        &self.network
    }

    /// Subnets.
    #[must_use]
    pub const fn subnet(&self) -> &Subnet<R> {
        &self.subnet
    }
}

/// Parameters for `vpc network create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkCreate {
    name: String,
    cidr: Option<String>,
    options: ExtraOptions,
}

impl NetworkCreate {
    /// Creates a request for the named network.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cidr: None,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--cidr`.
    #[must_use]
    pub fn cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidr = Some(cidr.into());
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

/// Parameters for `vpc subnet create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubnetCreate {
    name: String,
    network: String,
    cidr: String,
    zone: Option<String>,
    options: ExtraOptions,
}

impl SubnetCreate {
    /// Creates a request for a subnet of `network` covering `cidr`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        network: impl Into<String>,
        cidr: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            network: network.into(),
            cidr: cidr.into(),
            zone: None,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--zone`.
    #[must_use]
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
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

/// `nebius vpc network` commands.
#[derive(Debug)]
pub struct Network<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Network<R> {
    /// Lists networks.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(NETWORK, "list").into_args())
    }

    /// Fetches one network.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(NETWORK, "get").arg(name).into_args())
    }

    /// Creates a network.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &NetworkCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(NETWORK, "create")
            .arg(&request.name)
            .optional_flag("cidr", request.cidr.as_deref())
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a network.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(NETWORK, "delete").arg(name).into_args())
    }
}

/// `nebius vpc subnet` commands.
#[derive(Debug)]
pub struct Subnet<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Subnet<R> {
    /// Lists subnets.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SUBNET, "list").into_args())
    }

    /// Fetches one subnet.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SUBNET, "get").arg(name).into_args())
    }

    /// Creates a subnet.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &SubnetCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(SUBNET, "create")
            .arg(&request.name)
            .flag("network", &request.network)
            .flag("cidr", &request.cidr)
            .optional_flag("zone", request.zone.as_deref())
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a subnet.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SUBNET, "delete").arg(name).into_args())
    }
}
