//! Text front end over the ledger engine.

pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
pub mod shell;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
