use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::{Cli, DeployArgs};
use crate::constants::INVALID_SIZE_EXIT_CODE;
use crate::error::ExitError;
use crate::utils::{
    FlagSource, env_parser, get_hostname, get_networks, parse_extra_resources, parse_ram_in_human,
    split_equality,
};

/// Runtime settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            log_filter: cli.log_level.clone(),
        }
    }
}

/// A workload definition with every flag resolved to its final value.
#[derive(Debug, Clone, Serialize)]
pub struct DeployConfig {
    pub name: String,
    pub image: String,
    pub node: String,
    pub networks: BTreeMap<String, String>,
    /// Bytes; negative means unlimited, zero means unset.
    pub memory_limit: i64,
    pub memory_request: i64,
    pub env: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub extra_resources: BTreeMap<String, Value>,
}

impl DeployConfig {
    /// Resolves `args`; `flags` is the raw flag view the args were parsed from.
    pub fn resolve<F>(
        args: &DeployArgs,
        flags: &F,
    ) -> Result<Self>
    where
        F: FlagSource + ?Sized,
    {
        let node = match &args.node {
            Some(node) => node.clone(),
            None => get_hostname(),
        };
        let networks = args
            .network
            .as_deref()
            .map(get_networks)
            .unwrap_or_default();

        let memory_limit = memory_flag("--memory", args.memory.as_deref())?;
        let memory_request = memory_flag("--memory-request", args.memory_request.as_deref())?;

        let mut env = match &args.env_file {
            Some(path) => read_env_file(path)?,
            None => BTreeMap::new(),
        };
        env.extend(split_equality(&args.env));

        let extra_resources =
            parse_extra_resources(flags).context("invalid --extra-resources value")?;

        let deploy = DeployConfig {
            name: args.name.clone(),
            image: args.image.clone(),
            node,
            networks,
            memory_limit,
            memory_request,
            env,
            labels: split_equality(&args.labels),
            extra_resources,
        };
        debug!(?deploy, "resolved deploy config");
        Ok(deploy)
    }
}

fn memory_flag(
    flag: &str,
    value: Option<&str>,
) -> Result<i64> {
    let raw = value.unwrap_or_default();
    match parse_ram_in_human(raw) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            let err = anyhow::Error::new(e).context(format!("invalid {flag} value"));
            Err(ExitError::new(err, INVALID_SIZE_EXIT_CODE).into())
        }
    }
}

/// Reads an env file, expands it as a template and collects its `KEY=VALUE`
/// lines. Blank lines and `#` comments are ignored.
pub fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let raw = fs::read(path).with_context(|| format!("reading env file {}", path.display()))?;
    let rendered =
        env_parser(&raw).with_context(|| format!("expanding env file {}", path.display()))?;
    let text = String::from_utf8_lossy(&rendered);

    let mut lines = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.contains('=') {
            warn!("{}:{}: skipping line without '='", path.display(), n + 1);
            continue;
        }
        lines.push(line);
    }
    Ok(split_equality(lines))
}
