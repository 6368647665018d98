//! Unit tests for command construction and output handling.

use std::io;
use std::sync::{Arc, Mutex};

use super::*;
use crate::test_support::{CommandInvocation, ScriptedRunner};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn runner() -> ScriptedRunner {
    ScriptedRunner::with_cli_available()
}

fn executor(config: NebiusConfig, runner: &ScriptedRunner) -> Executor<ScriptedRunner> {
    Executor::new(config, runner.clone())
        .unwrap_or_else(|err| panic!("executor should build: {err}"))
}

fn last_args(runner: &ScriptedRunner) -> Vec<String> {
    runner
        .last_invocation()
        .map(|call| call.arg_strings())
        .unwrap_or_default()
}

#[rstest]
fn construction_probes_for_the_binary(runner: ScriptedRunner) {
    let _executor = executor(NebiusConfig::default(), &runner);

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(
        invocations
            .first()
            .map(CommandInvocation::command_string)
            .as_deref(),
        Some("which nebius")
    );
}

#[rstest]
fn construction_fails_when_probe_fails() {
    let runner = ScriptedRunner::new();
    runner.push_failure(1, "");

    let err = Executor::new(NebiusConfig::default(), runner)
        .expect_err("probe failure should abort construction");
    assert!(
        matches!(err, NebiusError::ExecutableNotFound { ref program, .. } if program == "nebius"),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn construction_fails_when_probe_cannot_spawn() {
    let err = Executor::new(NebiusConfig::default(), ScriptedRunner::new())
        .expect_err("spawn failure should abort construction");
    assert!(matches!(err, NebiusError::ExecutableNotFound { .. }));
}

#[rstest]
fn construction_rejects_blank_profile(runner: ScriptedRunner) {
    let err = Executor::new(NebiusConfig::default().with_profile(" "), runner.clone())
        .expect_err("blank profile should be rejected");
    assert_eq!(
        err,
        NebiusError::InvalidConfig {
            field: String::from("profile")
        }
    );
    assert!(runner.invocations().is_empty(), "probe should not run");
}

#[rstest]
#[case(NebiusConfig::default(), OutputFormat::Json, &["--format", "json", "version"])]
#[case(
    NebiusConfig::default().with_profile("test-profile"),
    OutputFormat::Json,
    &["--profile", "test-profile", "--format", "json", "version"]
)]
#[case(
    NebiusConfig::default().with_debug(true),
    OutputFormat::Yaml,
    &["--format", "yaml", "--debug", "version"]
)]
#[case(
    NebiusConfig::default().with_profile("p").with_debug(true),
    OutputFormat::Table,
    &["--profile", "p", "--format", "table", "--debug", "version"]
)]
fn global_flags_precede_command_parts(
    runner: ScriptedRunner,
    #[case] config: NebiusConfig,
    #[case] format: OutputFormat,
    #[case] expected: &[&str],
) {
    let exec = executor(config, &runner);
    let args: Vec<String> = exec
        .build_args(&to_args(&["version"]), format)
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args, expected);
}

#[rstest]
fn execute_parses_json_by_default(runner: ScriptedRunner) {
    runner.push_stdout(r#"{"version": "1.0.0"}"#);
    let exec = executor(NebiusConfig::default(), &runner);

    let response = exec
        .execute(&to_args(&["version"]), OutputFormat::Json, true)
        .expect("command should succeed");

    assert_eq!(response, Response::Json(json!({"version": "1.0.0"})));
    let call = runner.last_invocation().expect("invocation recorded");
    assert_eq!(call.program, "nebius");
    assert_eq!(call.command_string(), "nebius --format json version");
}

#[rstest]
fn execute_returns_raw_output_without_parsing(runner: ScriptedRunner) {
    runner.push_stdout("{\"version\": \"1.0.0\"}\n");
    let exec = executor(NebiusConfig::default(), &runner);

    let response = exec
        .execute(&to_args(&["version"]), OutputFormat::Json, false)
        .expect("command should succeed");

    assert_eq!(response, Response::Text(String::from("{\"version\": \"1.0.0\"}\n")));
}

#[rstest]
fn execute_skips_parsing_for_other_formats(runner: ScriptedRunner) {
    runner.push_stdout("version: 1.0.0");
    let exec = executor(NebiusConfig::default(), &runner);

    let response = exec
        .execute(&to_args(&["version"]), OutputFormat::Yaml, true)
        .expect("command should succeed");

    assert_eq!(response, Response::Text(String::from("version: 1.0.0")));
    assert_eq!(last_args(&runner), vec!["--format", "yaml", "version"]);
}

#[rstest]
#[case("")]
#[case("  \n\t")]
fn empty_json_output_yields_empty_object(runner: ScriptedRunner, #[case] stdout: &str) {
    runner.push_stdout(stdout);
    let exec = executor(NebiusConfig::default(), &runner);

    let value = exec
        .execute_json(&to_args(&["compute", "instance", "delete", "vm-1"]))
        .expect("empty output is not an error");

    assert_eq!(value, json!({}));
}

#[rstest]
fn invalid_json_raises_parse_error(runner: ScriptedRunner) {
    runner.push_stdout("invalid json");
    let exec = executor(NebiusConfig::default(), &runner);

    let err = exec
        .execute(&to_args(&["version"]), OutputFormat::Json, true)
        .expect_err("malformed JSON should fail");

    assert!(matches!(err, NebiusError::ResponseParse { .. }), "unexpected: {err:?}");
}

#[rstest]
fn non_zero_exit_raises_command_error(runner: ScriptedRunner) {
    runner.push_output(Some(1), "{\"ignored\": true}", "Command not found");
    let exec = executor(NebiusConfig::default().with_profile("dev"), &runner);

    let err = exec
        .execute(&to_args(&["invalid-command"]), OutputFormat::Json, true)
        .expect_err("non-zero exit should fail");

    assert_eq!(
        err,
        NebiusError::CommandExecution {
            command: String::from("nebius --profile dev --format json invalid-command"),
            exit_code: Some(1),
            status_text: String::from("1"),
            stderr: String::from("Command not found"),
        }
    );
}

#[rstest]
fn missing_exit_code_is_a_failure(runner: ScriptedRunner) {
    runner.push_output(None, "", "killed");
    let exec = executor(NebiusConfig::default(), &runner);

    let err = exec
        .execute_text(&to_args(&["version"]))
        .expect_err("signal termination should fail");

    assert_eq!(err.exit_code(), None);
    assert_eq!(err.stderr(), Some("killed"));
}

#[rstest]
fn configured_binary_is_probed_and_invoked(runner: ScriptedRunner) {
    runner.push_stdout("[]");
    let exec = executor(NebiusConfig::default().with_binary("/opt/nebius"), &runner);

    exec.execute_json(&to_args(&["iam", "role", "list"]))
        .expect("command should succeed");

    let programs: Vec<String> = runner
        .invocations()
        .into_iter()
        .map(|call| call.program)
        .collect();
    assert_eq!(programs, vec!["which", "/opt/nebius"]);
    assert_eq!(exec.binary(), "/opt/nebius");
}

#[rstest]
#[case(Response::Json(json!({"a": 1})), "{\"a\":1}")]
#[case(Response::Text(String::from("plain")), "plain")]
fn responses_convert_to_text(#[case] response: Response, #[case] expected: &str) {
    assert_eq!(response.into_text(), expected);
}

#[rstest]
#[case(Response::Json(json!([{"id": "vm-1"}])), json!([{"id": "vm-1"}]))]
#[case(Response::Text(String::from("0.12.3\n")), json!("0.12.3\n"))]
fn responses_convert_to_json(#[case] response: Response, #[case] expected: Value) {
    assert_eq!(response.into_json(), expected);
}

#[rstest]
fn execute_returns_json_or_text_per_request(runner: ScriptedRunner) {
    runner.push_stdout(r#"{"id":"net-1"}"#);
    runner.push_stdout("table output");
    let exec = executor(NebiusConfig::default(), &runner);

    let parsed = exec
        .execute(&to_args(&["vpc", "network", "get", "net-1"]), OutputFormat::Json, true)
        .expect("json command should succeed");
    let raw = exec
        .execute(&to_args(&["vpc", "network", "list"]), OutputFormat::Table, false)
        .expect("table command should succeed");

    assert_eq!(parsed.into_json(), json!({"id": "net-1"}));
    assert_eq!(raw.into_json(), json!("table output"));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `action` under an info-level subscriber and returns what it logged.
fn capture_info_logs(action: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[rstest]
#[case::debug_enabled(true, true)]
#[case::debug_disabled(false, false)]
fn command_line_is_logged_in_debug_mode(
    runner: ScriptedRunner,
    #[case] debug: bool,
    #[case] logged: bool,
) {
    runner.push_stdout("[]");
    let exec = executor(NebiusConfig::default().with_debug(debug), &runner);

    let logs = capture_info_logs(|| {
        exec.execute_json(&to_args(&["compute", "instance", "list"]))
            .expect("command should succeed");
    });

    assert_eq!(logs.contains("executing nebius command"), logged, "logs: {logs}");
    if logged {
        assert!(
            logs.contains("nebius --format json --debug compute instance list"),
            "logs: {logs}"
        );
    }
}

#[rstest]
fn output_format_renders_flag_token() {
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!(OutputFormat::Text.to_string(), "text");
}
