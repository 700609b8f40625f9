//! Aggregation helpers for totals and category breakdowns.
//!
//! Everything here is pure: callers pass a snapshot of entries and the limit.

use crate::domain::{CategoryBreakdown, ExpenseEntry, Summary};

pub struct Aggregator;

impl Aggregator {
    /// Sum of all amounts; zero for an empty ledger.
    pub fn total_spent(entries: &[ExpenseEntry]) -> f64 {
        entries.iter().map(|entry| entry.amount).sum()
    }

    /// `limit - total_spent`, negative once spending exceeds the limit.
    pub fn remaining(entries: &[ExpenseEntry], limit: f64) -> f64 {
        limit - Self::total_spent(entries)
    }

    /// Per-category sums. Categories without entries are absent.
    pub fn by_category(entries: &[ExpenseEntry]) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::new();
        for entry in entries {
            breakdown.add(entry.category, entry.amount);
        }
        breakdown
    }

    pub fn summarize(entries: &[ExpenseEntry], limit: f64) -> Summary {
        let total_spent = Self::total_spent(entries);
        Summary {
            total_spent,
            limit,
            remaining: limit - total_spent,
            entry_count: entries.len(),
        }
    }
}
