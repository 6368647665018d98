//! Behavioural coverage for the Nebius client.

mod bdd_steps;
mod scenarios;
mod test_helpers;
