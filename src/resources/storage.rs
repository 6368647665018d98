//! Object storage buckets.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::error::NebiusError;
use crate::options::ExtraOptions;
use crate::runner::CommandRunner;

use super::{CommandArgs, SharedExecutor};

const BUCKET: &[&str] = &["storage", "bucket"];

/// Storage family facade.
#[derive(Debug)]
pub struct Storage<R: CommandRunner> {
    bucket: Bucket<R>,
}

impl<R: CommandRunner> Storage<R> {
    pub(crate) fn new(executor: &SharedExecutor<R>) -> Self {
        Self {
            bucket: Bucket {
                executor: Arc::clone(executor),
            },
        }
    }

    /// Object storage buckets.
    #[must_use]
    pub const fn bucket(&self) -> &Bucket<R> {
        &self.bucket
    }
}

/// Parameters for `storage bucket create`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketCreate {
    name: String,
    region: Option<String>,
    options: ExtraOptions,
}

impl BucketCreate {
    /// Creates a request for the named bucket.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
            options: ExtraOptions::new(),
        }
    }

    /// Sets `--region`.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
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

/// `nebius storage bucket` commands.
#[derive(Debug)]
pub struct Bucket<R: CommandRunner> {
    executor: SharedExecutor<R>,
}

impl<R: CommandRunner> Bucket<R> {
    /// Lists buckets.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn list(&self) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(BUCKET, "list").into_args())
    }

    /// Fetches one bucket.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn get(&self, name: &str) -> Result<Value, NebiusError> {
        self.executor
            .execute_json(&CommandArgs::new(BUCKET, "get").arg(name).into_args())
    }

    /// Creates a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn create(&self, request: &BucketCreate) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(BUCKET, "create")
            .arg(&request.name)
            .optional_flag("region", request.region.as_deref())
            .options(&request.options);
        self.executor.execute_json(&args.into_args())
    }

    /// Deletes a bucket, passing `--force` when requested.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn delete(&self, name: &str, force: bool) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(BUCKET, "delete")
            .arg(name)
            .switch("force", force);
        self.executor.execute_json(&args.into_args())
    }

    /// Updates bucket settings from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`NebiusError`] when the command fails or emits invalid JSON.
    pub fn update(&self, name: &str, options: &ExtraOptions) -> Result<Value, NebiusError> {
        let args = CommandArgs::new(BUCKET, "update").arg(name).options(options);
        self.executor.execute_json(&args.into_args())
    }
}
