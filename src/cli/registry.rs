use std::collections::BTreeMap;

use crate::cli::core::{CommandResult, ShellContext};

pub(crate) type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A named shell command with its usage line.
#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub(crate) handler: CommandHandler,
}

impl CommandEntry {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandEntry>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl CommandRegistry {
    pub(crate) fn new(entries: Vec<CommandEntry>) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            registry.commands.insert(entry.name, entry);
        }
        registry
    }

    pub(crate) fn alias(mut self, alias: &'static str, target: &'static str) -> Self {
        self.aliases.insert(alias, target);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let key = self.aliases.get(name).copied().unwrap_or(name);
        self.commands.get(key)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.values()
    }
}
