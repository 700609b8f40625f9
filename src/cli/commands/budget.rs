use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::{BudgetStatus, Category, CategoryBreakdown, Summary};

const BAR_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "limit",
            "Show or set the monthly spending limit",
            "limit [amount]",
            cmd_limit,
        ),
        CommandEntry::new(
            "summary",
            "Show total spent and remaining balance",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "breakdown",
            "Show spending per category",
            "breakdown",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "categories",
            "List the available categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_limit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let limit = context.engine.limit()?;
            output::info(format!("Monthly limit: {}", context.money(limit)));
        }
        [amount] => {
            let summary = context.engine.set_limit(amount)?;
            output::success("Monthly limit updated!");
            print_summary(context, &summary);
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: limit [amount]".into(),
            ))
        }
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.engine.get_summary()?;
    print_summary(context, &summary);
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let breakdown = context.engine.get_category_breakdown()?;
    output::section("Expenses by Category");
    for line in breakdown_lines(&context.config.currency_symbol, &breakdown) {
        output::info(line);
    }
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
    output::info(names.join(", "));
    Ok(())
}

pub(crate) fn print_summary(context: &ShellContext, summary: &Summary) {
    output::info(format!(
        "Total Spent This Month: {}",
        context.money(summary.total_spent)
    ));
    let over = summary.status() == BudgetStatus::OverBudget;
    let remaining = format!("Remaining Balance: {}", context.money(summary.remaining));
    output::info(output::balance(remaining, over));
    if over {
        output::warning("You are over your monthly limit.");
    }
}

/// Aligned `category  amount  share  bar` rows, one per category.
pub(crate) fn breakdown_lines(symbol: &str, breakdown: &CategoryBreakdown) -> Vec<String> {
    let name_width = breakdown
        .iter()
        .map(|(category, _)| category.name().len())
        .max()
        .unwrap_or(0);
    breakdown
        .iter()
        .zip(breakdown.shares())
        .map(|((category, amount), (_, share))| {
            let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<name_width$}  {:>10}  {:>5.1}%  {}",
                category.name(),
                output::money(symbol, amount),
                share,
                "#".repeat(filled.min(BAR_WIDTH)),
                name_width = name_width
            )
        })
        .collect()
}
