//! Compute instances, disks, and images.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NebiusError;
use crate::options::ExtraOptions;
use crate::runner::CommandRunner;

use super::{CommandArgs, SharedExecutor};

const INSTANCE: &[&str] = &["compute", "instance"];
const DISK: &[&str] = &["compute", "disk"];
const IMAGE: &[&str] = &["compute", "image"];

/// Compute family facade.
#[derive(Debug)]
pub struct Compute<R: CommandRunner> {
    instance: Instance<R>,
    disk: Disk<R>,
    image: Image<R>,
}

impl<R: CommandRunner> Compute<R> {
    pub(crate) fn new(executor: &SharedExecutor<R>) -> Self {
        Self {
            instance: Instance {
                executor: Arc::clone(executor),
            },
            disk: Disk {
                executor: Arc::clone(executor),
            },
            image: Image {
                executor: Arc::clone(executor),
            },
        }
    }

    /// Virtual machine instances.
    #[must_use]
    pub const fn instance(&self) -> &Instance<R> {
        &self.instance
    }

    /// Block storage disks.
    #[must_use]
    pub const fn disk(&self) -> &Disk<R> {
        &self.disk
    }

    /// Boot images.
    #[must_use]
    pub const fn image(&self) -> &Image<R> {
        &self.image
    }
}

/// Parameters for `compute instance create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceCreate {
    name: String,
    zone: String,
    machine_type: String,
    image: String,
    options: ExtraOptions,
}

impl InstanceCreate {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        zone: impl Into<String>,
        machine_type: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
            machine_type: machine_type.into(),
            image: image.into(),
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

    fn command(&self) -> CommandArgs {
        CommandArgs::new(INSTANCE, "create")
            .arg(&self.name)
            .flag("zone", &self.zone)
            .flag("machine-type", &self.machine_type)
            .flag("image", &self.image)
            .options(&self.options)
    }
}

/// Parameters for `compute disk create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiskCreate {
    name: String,
    size: String,
    disk_type: Option<String>,
    options: ExtraOptions,
}

impl DiskCreate {
    /// Creates a request for a disk of `size` (as accepted by the CLI).
    #[must_use]
    pub fn new(name: impl Into<String>, size: impl Display) -> Self {
        Self {
            name: name.into(),
            size: size.to_string(),
            disk_type: None,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--type`.
    #[must_use]
    pub fn disk_type(mut self, disk_type: impl Into<String>) -> Self {
        self.disk_type = Some(disk_type.into());
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

    fn command(&self) -> CommandArgs {
        CommandArgs::new(DISK, "create")
            .arg(&self.name)
            .flag("size", &self.size)
            .optional_flag("type", self.disk_type.as_deref())
            .options(&self.options)
    }
}

/// `nebius compute instance` commands.
#[derive(Debug)]
pub struct Instance<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Instance<R> {
    /// Lists instances.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(INSTANCE, "list").into_args())
    }

    /// Fetches one instance by name or ID.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.action("get", name)
    }

    /// Creates an instance.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &InstanceCreate) -> Result<Value, NebiusError> {
        self.executor.execute_json(&request.command().into_args())
    }

    /// Deletes an instance.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str) -> Result<Value, NebiusError> {
        self.action("delete", name)
    }

    /// Starts a stopped instance.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn start(&self, name: &str) -> Result<Value, NebiusError> {
        self.action("start", name)
    }

    /// Stops a running instance.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn stop(&self, name: &str) -> Result<Value, NebiusError> {
        self.action("stop", name)
    }

    /// Restarts an instance.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn restart(&self, name: &str) -> Result<Value, NebiusError> {
        self.action("restart", name)
    }

    fn action(&self, action: &str, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(INSTANCE, action).arg(name).into_args())
    }
}

/// `nebius compute disk` commands.
#[derive(Debug)]
pub struct Disk<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Disk<R> {
    /// Lists disks.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(DISK, "list").into_args())
    }

    /// Fetches one disk.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(DISK, "get").arg(name).into_args())
    }

    /// Creates a disk.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &DiskCreate) -> Result<Value, NebiusError> {
        self.executor.execute_json(&request.command().into_args())
    }

    /// Deletes a disk.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(DISK, "delete").arg(name).into_args())
    }
}

/// `nebius compute image` commands.
#[derive(Debug)]
pub struct Image<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Image<R> {
    /// Lists images.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(IMAGE, "list").into_args())
    }

    /// Fetches one image.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(IMAGE, "get").arg(name).into_args())
    }
}
