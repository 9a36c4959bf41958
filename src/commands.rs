//! CLI actions. Each one takes the matches of its own subcommand and is run
//! through [`exit_coder`] so failures reach `main` with an exit status.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, FromArgMatches};
use tracing::debug;

use crate::cli::{DeployArgs, RenderArgs};
use crate::config::DeployConfig;
use crate::constants::STDIN_PATH;
use crate::error::ExitError;
use crate::utils::{env_parser, exit_coder, get_hostname};

/// Dispatches to the action of the selected subcommand.
pub fn run(matches: &ArgMatches) -> Result<(), ExitError> {
    match matches.subcommand() {
        Some(("deploy", sub)) => exit_coder(deploy)(sub),
        Some(("render", sub)) => exit_coder(render)(sub),
        Some(("hostname", sub)) => exit_coder(hostname)(sub),
        Some((other, _)) => Err(ExitError::generic(anyhow!("unknown command {other:?}"))),
        None => Err(ExitError::generic(anyhow!("no command given"))),
    }
}

pub fn deploy(matches: &ArgMatches) -> Result<()> {
    let args = DeployArgs::from_arg_matches(matches)?;
    let deploy = DeployConfig::resolve(&args, matches)?;
    let json = serde_json::to_string_pretty(&deploy)?;
    println!("{json}");
    Ok(())
}

pub fn render(matches: &ArgMatches) -> Result<()> {
    let args = RenderArgs::from_arg_matches(matches)?;
    let input = read_input(args.path.as_deref())?;
    let rendered = env_parser(&input).context("rendering template")?;
    debug!(bytes = rendered.len(), "template rendered");
    match args.output {
        Some(path) => fs::write(&path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn hostname(_matches: &ArgMatches) -> Result<()> {
    println!("{}", get_hostname());
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new(STDIN_PATH) => {
            fs::read(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading template from stdin")?;
            Ok(buf)
        }
    }
}
