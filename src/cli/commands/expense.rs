use chrono::NaiveDate;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::{Category, ExpenseEntry, DATE_FORMAT};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense (category defaults to Food, date to today)",
            "add <amount> [category] [YYYY-MM-DD]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete an expense by its number in `list`",
            "delete <number>",
            cmd_delete,
        ),
        CommandEntry::new("list", "List this month's expenses", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = args.first().copied().unwrap_or("");
    let category = args
        .get(1)
        .copied()
        .unwrap_or_else(|| Category::default().name());
    let date = match args.get(2) {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is not a YYYY-MM-DD date", raw))
        })?),
        None => None,
    };
    if args.len() > 3 {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> [category] [YYYY-MM-DD]".into(),
        ));
    }

    let entries = context.engine.add_expense(amount, category, date)?;
    if let Some(added) = entries.last() {
        output::success(format!(
            "Added {} to {}.",
            context.money(added.amount),
            added.category
        ));
    }
    print_entries(context, &entries);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = match args.first() {
        None => None,
        Some(raw) => {
            let number: usize = raw.parse().map_err(|_| {
                CommandError::InvalidArguments(format!("`{}` is not an expense number", raw))
            })?;
            let position = number.checked_sub(1).ok_or_else(|| {
                CommandError::InvalidArguments("expense numbers start at 1".into())
            })?;
            Some(position)
        }
    };

    let entries = context.engine.delete_expense(position)?;
    output::success("Expense deleted.");
    print_entries(context, &entries);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let entries = context.engine.entries()?;
    print_entries(context, &entries);
    Ok(())
}

pub(crate) fn print_entries(context: &ShellContext, entries: &[ExpenseEntry]) {
    if entries.is_empty() {
        output::info("No expenses recorded this month.");
        return;
    }
    for line in entry_lines(&context.config.currency_symbol, entries) {
        output::info(line);
    }
}

/// One `n. date | amount | category` line per entry, numbered from 1.
pub(crate) fn entry_lines(symbol: &str, entries: &[ExpenseEntry]) -> Vec<String> {
    let width = entries.len().to_string().len();
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{:>width$}. {} | {} | {}",
                index + 1,
                entry.date_label(),
                output::money(symbol, entry.amount),
                entry.category,
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_lines_are_numbered_from_one() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let entries = vec![
            ExpenseEntry::new(date, 250.0, Category::Food),
            ExpenseEntry::new(date, 3.5, Category::Travel),
        ];
        let lines = entry_lines("₹", &entries);
        assert_eq!(lines[0], "1. 2024-05-01 | ₹250.00 | Food");
        assert_eq!(lines[1], "2. 2024-05-01 | ₹3.50 | Travel");
    }
}
