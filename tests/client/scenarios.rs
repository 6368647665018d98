//! BDD scenarios for client creation and profile listing.

use rstest_bdd_macros::scenario;

use super::test_helpers::{ClientContext, client_context};

#[scenario(
    path = "tests/features/client.feature",
    name = "Create a client with default settings"
)]
fn scenario_default_client(client_context: ClientContext) {
    let _ = client_context;
}

#[scenario(
    path = "tests/features/client.feature",
    name = "Create a client with a profile"
)]
fn scenario_client_with_profile(client_context: ClientContext) {
    let _ = client_context;
}

#[scenario(
    path = "tests/features/client.feature",
    name = "Create a client with debug mode enabled"
)]
fn scenario_debug_client(client_context: ClientContext) {
    let _ = client_context;
}

#[scenario(
    path = "tests/features/client.feature",
    name = "Refuse to create a client without the CLI"
)]
fn scenario_missing_cli(client_context: ClientContext) {
    let _ = client_context;
}

#[scenario(
    path = "tests/features/profiles.feature",
    name = "Identify the default profile"
)]
fn scenario_default_profile(client_context: ClientContext) {
    let _ = client_context;
}

#[scenario(path = "tests/features/profiles.feature", name = "Surface CLI failures")]
fn scenario_profile_failures(client_context: ClientContext) {
    let _ = client_context;
}
