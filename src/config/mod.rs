//! Attack configuration: parameters, YAML specification files and CLI
//! arguments.

mod attack;
mod cli;
mod loader;


pub use attack::SaliencyMapConfig;
pub use cli::{parse_args, AttackArgs, Cli, Command, InfoArgs, OutputFormat, ValidateArgs};
pub use loader::{load_spec, parse_spec, read_spec, AttackSpec};
