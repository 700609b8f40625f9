use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::LimitRecovery;
use crate::utils::{build_info, paths};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [currency <symbol> | color <on|off> | limit-recovery <reset|fail> | data-dir <path>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = &context.config;
            output::section("Configuration");
            output::info(format!("  currency       : {}", config.currency_symbol));
            output::info(format!(
                "  color          : {}",
                if config.ui_color_enabled { "on" } else { "off" }
            ));
            output::info(format!("  limit-recovery : {}", config.limit_recovery));
            let data_dir = config.resolve_data_dir(&paths::app_data_dir());
            output::info(format!("  data-dir       : {}", data_dir.display()));
            output::info(format!(
                "  config file    : {}",
                context.config_manager.config_path().display()
            ));
            return Ok(());
        }
        ["currency", symbol] => context.config.currency_symbol = symbol.to_string(),
        ["color", value] => context.config.ui_color_enabled = parse_switch(value)?,
        ["limit-recovery", value] => {
            let policy = match value.to_ascii_lowercase().as_str() {
                "reset" => LimitRecovery::Reset,
                "fail" => LimitRecovery::Fail,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "`{}` is not reset or fail",
                        other
                    )))
                }
            };
            context.config.limit_recovery = policy;
            context.engine.set_limit_recovery(policy);
        }
        ["data-dir", path] => context.config.data_dir = Some(PathBuf::from(path)),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: config [currency <symbol> | color <on|off> | limit-recovery <reset|fail> | data-dir <path>]"
                    .into(),
            ))
        }
    }

    context.config_manager.save(&context.config)?;
    output::set_preferences(output::OutputPreferences {
        color_enabled: context.config.ui_color_enabled,
    });
    output::success("Configuration saved.");
    if matches!(args, ["data-dir", _]) {
        output::hint("The new data directory is used from the next start.");
    }
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "`{}` is not on or off",
            other
        ))),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Expense Ledger {}", meta.version));
    output::info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at     : {}", meta.timestamp));
    output::info(format!("  Target       : {}", meta.target));
    output::info(format!("  Profile      : {}", meta.profile));
    output::info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                output::info(format!("{} - {}", entry.name, entry.description));
                output::info(format!("Usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    let width = context
        .registry
        .names()
        .map(str::len)
        .max()
        .unwrap_or(0);
    for entry in context.registry.entries() {
        output::info(format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
