//! BDD step definitions for client creation and profile listing.

use nebius::{NebiusConfig, NebiusError};
use rstest_bdd_macros::{given, then, when};

use super::test_helpers::{ClientContext, ClientSummary, CreationOutcome, ProfilesOutcome};

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

#[given("the nebius CLI is installed")]
fn cli_installed(client_context: ClientContext) -> ClientContext {
    client_context.cli_installed();
    client_context
}

#[given("the nebius CLI is not installed")]
fn cli_not_installed(client_context: ClientContext) -> ClientContext {
    client_context.cli_missing();
    client_context
}

#[given("the CLI lists profiles \"{first}\", \"{second}\" and \"{third}\"")]
fn cli_lists_profiles(
    client_context: ClientContext,
    first: String,
    second: String,
    third: String,
) -> ClientContext {
    client_context
        .runner
        .push_stdout(format!("{first}\n{second}\n{third}\n"));
    client_context
}

#[given("the CLI fails with exit code {code:i32} and stderr \"{stderr}\"")]
fn cli_fails(client_context: ClientContext, code: i32, stderr: String) -> ClientContext {
    client_context.runner.push_failure(code, stderr);
    client_context
}

#[when("I create a new Nebius client")]
fn create_default_client(mut client_context: ClientContext) -> ClientContext {
    client_context.record_creation(NebiusConfig::default());
    client_context
}

#[when("I create a new Nebius client with profile \"{profile}\"")]
fn create_client_with_profile(mut client_context: ClientContext, profile: String) -> ClientContext {
    client_context.record_creation(NebiusConfig::default().with_profile(profile));
    client_context
}

#[when("I create a new Nebius client with debug mode enabled")]
fn create_debug_client(mut client_context: ClientContext) -> ClientContext {
    client_context.record_creation(NebiusConfig::default().with_debug(true));
    client_context
}

#[when("I list profiles")]
fn list_profiles(mut client_context: ClientContext) -> ClientContext {
    client_context.record_profiles();
    client_context
}

fn created(client_context: &ClientContext) -> Result<&ClientSummary, StepError> {
    match client_context.creation.as_ref() {
        Some(CreationOutcome::Created(summary)) => Ok(summary),
        Some(CreationOutcome::Failed(err)) => Err(StepError::Assertion(format!(
            "expected client creation to succeed, got: {err}"
        ))),
        None => Err(StepError::Assertion(String::from("client was never created"))),
    }
}

#[then("the client is successfully initialised")]
fn client_initialised(client_context: &ClientContext) -> Result<(), StepError> {
    created(client_context).map(|_| ())
}

#[then("the client has no profile")]
fn client_has_no_profile(client_context: &ClientContext) -> Result<(), StepError> {
    let summary = created(client_context)?;
    if summary.profile.is_none() {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected no profile, got {:?}",
            summary.profile
        )))
    }
}

#[then("the client uses profile \"{profile}\"")]
fn client_uses_profile(client_context: &ClientContext, profile: String) -> Result<(), StepError> {
    let summary = created(client_context)?;
    if summary.profile.as_deref() == Some(profile.as_str()) {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected profile {profile}, got {:?}",
            summary.profile
        )))
    }
}

#[then("the client has debug mode enabled")]
fn client_has_debug(client_context: &ClientContext) -> Result<(), StepError> {
    if created(client_context)?.debug {
        Ok(())
    } else {
        Err(StepError::Assertion(String::from("expected debug mode")))
    }
}

#[then("client creation fails because the CLI is missing")]
fn creation_fails(client_context: &ClientContext) -> Result<(), StepError> {
    match client_context.creation.as_ref() {
        Some(CreationOutcome::Failed(NebiusError::ExecutableNotFound { .. })) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected ExecutableNotFound, got: {other:?}"
        ))),
    }
}

#[then("{count:u32} profiles are returned in CLI order")]
fn profiles_in_order(client_context: &ClientContext, count: u32) -> Result<(), StepError> {
    let Some(ProfilesOutcome::Listed(profiles)) = client_context.profiles.as_ref() else {
        return Err(StepError::Assertion(format!(
            "expected profiles, got: {:?}",
            client_context.profiles
        )));
    };
    let names: Vec<&str> = profiles.iter().map(|profile| profile.name.as_str()).collect();
    let expected = ["default", "my-profile", "another-profile"];
    if usize::try_from(count).ok() == Some(profiles.len()) && names == expected {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected {count} profiles in order, got {names:?}"
        )))
    }
}

#[then("\"{name}\" is the only default profile")]
fn only_default(client_context: &ClientContext, name: String) -> Result<(), StepError> {
    let Some(ProfilesOutcome::Listed(profiles)) = client_context.profiles.as_ref() else {
        return Err(StepError::Assertion(String::from("missing profiles")));
    };
    let defaults: Vec<&str> = profiles
        .iter()
        .filter(|profile| profile.is_default)
        .map(|profile| profile.name.as_str())
        .collect();
    if defaults == [name.as_str()] {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected only {name} as default, got {defaults:?}"
        )))
    }
}

#[then("the command error reports exit code {code:i32} and stderr \"{stderr}\"")]
fn command_error_reported(
    client_context: &ClientContext,
    code: i32,
    stderr: String,
) -> Result<(), StepError> {
    let Some(ProfilesOutcome::Failed(err)) = client_context.profiles.as_ref() else {
        return Err(StepError::Assertion(String::from(
            "expected profile listing to fail",
        )));
    };
    if err.exit_code() == Some(code) && err.stderr() == Some(stderr.as_str()) {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected exit code {code} and stderr {stderr}, got: {err:?}"
        )))
    }
}
