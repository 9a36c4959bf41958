// Stateless helpers used by the command layer
pub mod exit;
pub mod host;
pub mod kv;
pub mod resources;
pub mod size;
pub mod template;

pub use exit::exit_coder;
pub use host::get_hostname;
pub use kv::{get_networks, split_equality};
pub use resources::{FlagSource, parse_extra_resources};
pub use size::parse_ram_in_human;
pub use template::{env_parser, render_template};
