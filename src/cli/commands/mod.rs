pub mod budget;
pub mod expense;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn registry() -> CommandRegistry {
    let mut entries = Vec::new();
    entries.extend(expense::definitions());
    entries.extend(budget::definitions());
    entries.extend(system::definitions());
    CommandRegistry::new(entries)
        .alias("ls", "list")
        .alias("rm", "delete")
        .alias("quit", "exit")
}
