use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_LOG_FILTER, EXTRA_RESOURCES_FLAG, LOG_ENV_VAR};

#[derive(Parser, Debug)]
#[command(name = "podctl", version)]
#[command(about = "Resolve workload definitions and render environment templates.")]
pub struct Cli {
    /// Log filter, e.g. "debug" or "podctl=trace".
    #[arg(
        long = "log-level",
        env = LOG_ENV_VAR,
        default_value = DEFAULT_LOG_FILTER,
        global = true
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a workload definition and print it as JSON without starting it.
    Deploy(DeployArgs),
    /// Render a template against the process environment.
    Render(RenderArgs),
    /// Print the host name of this machine.
    Hostname,
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Workload name.
    #[arg(long)]
    pub name: String,

    /// Container image.
    #[arg(long)]
    pub image: String,

    /// Node to place the workload on; defaults to this host.
    #[arg(long)]
    pub node: Option<String>,

    /// Network to join, as NETWORK or NETWORK=ADDRESS.
    #[arg(long)]
    pub network: Option<String>,

    /// Memory limit, e.g. 512MB or 2GiB. Negative values mean "unlimited".
    #[arg(short = 'm', long = "memory", allow_hyphen_values = true)]
    pub memory: Option<String>,

    /// Memory reservation, same format as --memory.
    #[arg(long = "memory-request", allow_hyphen_values = true)]
    pub memory_request: Option<String>,

    /// Environment variable as KEY=VALUE; repeatable.
    #[arg(short = 'e', long = "env")]
    pub env: Vec<String>,

    /// Template file of KEY=VALUE lines, rendered against the local environment.
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,

    /// Label as KEY=VALUE; repeatable.
    #[arg(short = 'l', long = "label")]
    pub labels: Vec<String>,

    /// Extra scheduler resources as a JSON object, e.g. '{"gpu":2}'.
    #[arg(id = EXTRA_RESOURCES_FLAG, long = EXTRA_RESOURCES_FLAG)]
    pub extra_resources: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Template file; reads stdin when omitted or "-".
    pub path: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
