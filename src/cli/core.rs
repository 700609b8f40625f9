use std::io;

use strsim::levenshtein;
use thiserror::Error;

use crate::cli::commands;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{Config, ConfigManager, EngineConfig};
use crate::core::{LedgerEngine, Transition};
use crate::errors::{ErrorKind, LedgerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
    /// A single command passed on the command line.
    OneShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures that stop the CLI itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures of a single command; reported and then the shell carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("exit requested")]
    ExitRequested,
}

pub struct ShellContext {
    pub registry: CommandRegistry,
    pub engine: LedgerEngine,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new() -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let engine = LedgerEngine::open(&EngineConfig::from_config(&config));
        Self::with_parts(engine, config_manager, config)
    }

    pub fn with_parts(
        mut engine: LedgerEngine,
        config_manager: ConfigManager,
        config: Config,
    ) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        engine.initialize()?;
        let context = Self {
            registry: commands::registry(),
            engine,
            config_manager,
            config,
            running: true,
        };
        context.announce_rollover()?;
        Ok(context)
    }

    fn announce_rollover(&self) -> Result<(), CliError> {
        if let Transition::Rolled { previous } = self.engine.last_transition()? {
            let period = self.engine.period()?;
            match previous {
                Some(previous) => output::info(format!(
                    "New month {}: expenses from {} were cleared.",
                    period, previous
                )),
                None => output::info(format!("New month {}: expenses were cleared.", period)),
            }
        }
        Ok(())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        match self.engine.period() {
            Ok(period) => format!("ledger {}> ", period),
            Err(_) => "ledger> ".to_string(),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        output::money(&self.config.currency_symbol, amount)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let handler = entry.handler;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Prints `err` in the style its kind calls for. Returns whether the
    /// failure should count against the exit status.
    pub(crate) fn report_error(&self, err: &CommandError) -> bool {
        match err {
            CommandError::ExitRequested => false,
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                true
            }
            CommandError::Core(err) => self.report_ledger_error(err),
        }
    }

    fn report_ledger_error(&self, err: &LedgerError) -> bool {
        match (err.kind(), err) {
            (_, LedgerError::Index { position, len }) => {
                output::error(format!(
                    "There is no expense #{}; this month's list has {}.",
                    position + 1,
                    len
                ));
                output::hint("Run `list` to see expense numbers.");
                true
            }
            (ErrorKind::BadInput, _) => {
                output::error(err);
                true
            }
            (ErrorKind::NothingSelected, _) => {
                output::warning("Select an expense to delete.");
                output::hint("Usage: delete <number> (see `list`).");
                true
            }
            (ErrorKind::NoData, _) => {
                output::info("No expenses to show.");
                false
            }
            (ErrorKind::Fatal, _) => {
                output::error(err);
                true
            }
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::hint(format!("Suggestion: `{}`?", best));
            }
        }
    }
}
