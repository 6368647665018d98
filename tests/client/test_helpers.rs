//! Shared fixtures and helpers for client BDD scenarios.

use nebius::test_support::{FAKE_BINARY_PATH, ScriptedRunner};
use nebius::{NebiusClient, NebiusConfig, NebiusError, Profile};
use rstest::fixture;

/// Settings observed on a successfully created client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientSummary {
    pub profile: Option<String>,
    pub debug: bool,
}

#[derive(Clone, Debug)]
pub enum CreationOutcome {
    Created(ClientSummary),
    Failed(NebiusError),
}

#[derive(Clone, Debug)]
pub enum ProfilesOutcome {
    Listed(Vec<Profile>),
    Failed(NebiusError),
}

#[derive(Clone, Debug)]
pub struct ClientContext {
    pub runner: ScriptedRunner,
    pub creation: Option<CreationOutcome>,
    pub profiles: Option<ProfilesOutcome>,
}

#[fixture]
pub fn client_context() -> ClientContext {
    ClientContext {
        runner: ScriptedRunner::new(),
        creation: None,
        profiles: None,
    }
}

impl ClientContext {
    pub fn cli_installed(&self) {
        self.runner
            .push_output(Some(0), format!("{FAKE_BINARY_PATH}\n"), "");
    }

    pub fn cli_missing(&self) {
        self.runner.push_failure(1, "");
    }

    pub fn build(&self, config: NebiusConfig) -> Result<NebiusClient<ScriptedRunner>, NebiusError> {
        NebiusClient::with_runner(config, self.runner.clone())
    }

    pub fn record_creation(&mut self, config: NebiusConfig) {
        let outcome = match self.build(config) {
            Ok(client) => CreationOutcome::Created(ClientSummary {
                profile: client.profile().map(str::to_owned),
                debug: client.debug(),
            }),
            Err(err) => CreationOutcome::Failed(err),
        };
        self.creation = Some(outcome);
    }

    pub fn record_profiles(&mut self) {
        let outcome = match self
            .build(NebiusConfig::default())
            .and_then(|client| client.profiles())
        {
            Ok(profiles) => ProfilesOutcome::Listed(profiles),
            Err(err) => ProfilesOutcome::Failed(err),
        };
        self.profiles = Some(outcome);
    }
}
