//! Terminal host for a form session: reads commands, forwards them to the
//! controller as events and redraws the form after each one.

pub mod commands;
pub mod context;
pub mod output;
pub mod render;
mod shell;

pub use commands::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_ENV};
