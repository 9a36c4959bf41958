use clap::{CommandFactory, FromArgMatches};
use podctl::cli::Cli;
use podctl::config::Config;
use podctl::error::HasExitCode;
use podctl::{commands, logging};

fn main() {
    // Usage errors exit here with clap's own status (2)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let config = Config::from_cli(&cli);
    logging::init(&config.log_filter);

    if let Err(err) = commands::run(&matches) {
        eprintln!("Error: {:#}", err.inner());
        std::process::exit(err.exit_code());
    }
}
