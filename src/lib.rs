pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod utils;

// Helpers are used directly by most callers
pub use error::{
    ExitError, HasExitCode, IntoExitError, ParseError, RenderError, TemplateError,
};
pub use utils::{
    FlagSource, env_parser, exit_coder, get_hostname, get_networks, parse_extra_resources,
    parse_ram_in_human, render_template, split_equality,
};
