//! IAM users, service accounts, and roles.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NebiusError;
use crate::options::ExtraOptions;
use crate::runner::CommandRunner;

use super::{CommandArgs, SharedExecutor};

const USER: &[&str] = &["iam", "user"];
const SERVICE_ACCOUNT: &[&str] = &["iam", "service-account"];
const ROLE: &[&str] = &["iam", "role"];

/// IAM family facade.
#[derive(Debug)]
pub struct Iam<R: CommandRunner> {
    user: User<R>,
    service_account: ServiceAccount<R>,
    role: Role<R>,
}

impl<R: CommandRunner> Iam<R> {
    pub(crate) fn new(executor: &SharedExecutor<R>) -> Self {
        Self {
            user: User {
                executor: Arc::clone(executor),
            },
            service_account: ServiceAccount {
                executor: Arc::clone(executor),
            },
            role: Role {
                executor: Arc::clone(executor),
            },
        }
    }

    /// Human users.
    #[must_use]
    pub const fn user(&self) -> &User<R> {
        &self.user
    }

    /// Service accounts.
    #[must_use]
    pub const fn service_account(&self) -> &ServiceAccount<R> {
        &self.service_account
    }

    /// Roles.
    #[must_use]
    pub const fn role(&self) -> &Role<R> {
        &self.role
    }
}

/// Parameters for `iam service-account create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceAccountCreate {
    name: String,
    description: Option<String>,
    options: ExtraOptions,
}

impl ServiceAccountCreate {
    /// Creates a request for the named service account.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--description`.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

/// `nebius iam user` commands.
#[derive(Debug)]
pub struct User<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> User<R> {
    /// Lists users.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(USER, "list").into_args())
    }

    /// Fetches one user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, id: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(USER, "get").arg(id).into_args())
    }
}

/// `nebius iam service-account` commands.
#[derive(Debug)]
pub struct ServiceAccount<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> ServiceAccount<R> {
    /// Lists service accounts.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SERVICE_ACCOUNT, "list").into_args())
    }

    /// Fetches one service account by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, id: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SERVICE_ACCOUNT, "get").arg(id).into_args())
    }

    /// Creates a service account.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &ServiceAccountCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(SERVICE_ACCOUNT, "create")
            .arg(&request.name)
            .optional_flag("description", request.description.as_deref())
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a service account.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, id: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(SERVICE_ACCOUNT, "delete").arg(id).into_args())
    }
}

/// `nebius iam role` commands.
#[derive(Debug)]
pub struct Role<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Role<R> {
    /// Lists roles.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(ROLE, "list").into_args())
    }

    /// Fetches one role by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, id: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(ROLE, "get").arg(id).into_args())
    }
}
