//! Binary entry point for the `nebius-rs` CLI.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use nebius::{CommandRunner, NebiusClient, NebiusConfig, NebiusError};

mod cli;

use cli::{Cli, Command, ResourceKind};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Nebius(#[from] NebiusError),
    #[error("{0:?} requires --cluster")]
    MissingCluster(ResourceKind),
    #[error("failed to write output: {0}")]
    Output(String),
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Output(value.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    let exit_code = match dispatch(cli) {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let mut config = NebiusConfig::load_without_cli_args()?;
    if let Some(profile) = cli.profile {
        config.profile = Some(profile);
    }
    if cli.debug {
        config.debug = true;
    }

    let client = NebiusClient::new(config)?;
    run(&client, cli.command, &mut io::stdout())
}

fn run<R: CommandRunner>(
    client: &NebiusClient<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Version => writeln!(out, "{}", client.version()?)?,
        Command::Profiles => {
            for profile in client.profiles()? {
                let marker = if profile.is_default { " (default)" } else { "" };
                writeln!(out, "{}{marker}", profile.name)?;
            }
        }
        Command::CreateProfile(args) => {
            let output = client.create_profile(&args.parent_id, args.name.as_deref())?;
            write!(out, "{output}")?;
        }
        Command::List(args) => {
            let value = list(client, args.resource, args.cluster.as_deref())?;
            write_json(out, &value)?;
        }
        Command::Get(args) => {
            let value = get(client, args.resource, &args.id, args.cluster.as_deref())?;
            write_json(out, &value)?;
        }
        Command::Credentials(args) => {
            let kubeconfig = client.mk8s().cluster().get_credentials(&args.cluster)?;
            write!(out, "{kubeconfig}")?;
        }
    }
    Ok(())
}

fn list<R: CommandRunner>(
    client: &NebiusClient<R>,
    resource: ResourceKind,
    cluster: Option<&str>,
) -> Result<Value, CliError> {
    let value = match resource {
        ResourceKind::Instance => client.compute().instance().list()?,
        ResourceKind::Disk => client.compute().disk().list()?,
        ResourceKind::Image => client.compute().image().list()?,
        ResourceKind::Bucket => client.storage().bucket().list()?,
        ResourceKind::User => client.iam().user().list()?,
        ResourceKind::ServiceAccount => client.iam().service_account().list()?,
        ResourceKind::Role => client.iam().role().list()?,
        ResourceKind::Network => client.vpc().network().list()?,
        ResourceKind::Subnet => client.vpc().subnet().list()?,
        ResourceKind::Cluster => client.mk8s().cluster().list()?,
        ResourceKind::NodeGroup => client
            .mk8s()
            .node_group()
            .list(require_cluster(resource, cluster)?)?,
    };
    Ok(value)
}

fn get<R: CommandRunner>(
    client: &NebiusClient<R>,
    resource: ResourceKind,
    id: &str,
    cluster: Option<&str>,
) -> Result<Value, CliError> {
    let value = match resource {
        ResourceKind::Instance => client.compute().instance().get(id)?,
        ResourceKind::Disk => client.compute().disk().get(id)?,
        ResourceKind::Image => client.compute().image().get(id)?,
        ResourceKind::Bucket => client.storage().bucket().get(id)?,
        ResourceKind::User => client.iam().user().get(id)?,
        ResourceKind::ServiceAccount => client.iam().service_account().get(id)?,
        ResourceKind::Role => client.iam().role().get(id)?,
        ResourceKind::Network => client.vpc().network().get(id)?,
        ResourceKind::Subnet => client.vpc().subnet().get(id)?,
        ResourceKind::Cluster => client.mk8s().cluster().get(id)?,
        ResourceKind::NodeGroup => client
            .mk8s()
            .node_group()
            .get(id, require_cluster(resource, cluster)?)?,
    };
    Ok(value)
}

fn require_cluster(resource: ResourceKind, cluster: Option<&str>) -> Result<&str, CliError> {
    cluster.ok_or(CliError::MissingCluster(resource))
}

fn write_json(out: &mut impl Write, value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "{err}").ok();
}
