//! Derived views over the current period: totals and per-category sums.

use serde::Serialize;

use crate::domain::Category;

/// Whether spending stayed within the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    UnderBudget,
    OverBudget,
}

/// Totals for the active period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_spent: f64,
    pub limit: f64,
    /// `limit - total_spent`; negative once the limit is exceeded.
    pub remaining: f64,
    pub entry_count: usize,
}

impl Summary {
    pub fn status(&self) -> BudgetStatus {
        if self.remaining < 0.0 {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::UnderBudget
        }
    }
}

/// Spending grouped by category, ordered by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    totals: Vec<(Category, f64)>,
}

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `category`, inserting it at the end when first seen.
    pub fn add(&mut self, category: Category, amount: f64) {
        match self.totals.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, total)) => *total += amount,
            None => self.totals.push((category, amount)),
        }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.totals
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.totals.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().map(|(_, amount)| amount).sum()
    }

    /// Percentage of the overall total per category. All shares are zero when
    /// the total is zero.
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let total = self.total();
        self.totals
            .iter()
            .map(|(category, amount)| {
                let share = if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                };
                (*category, share)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_sign_of_remaining() {
        let mut summary = Summary {
            total_spent: 150.0,
            limit: 100.0,
            remaining: -50.0,
            entry_count: 1,
        };
        assert_eq!(summary.status(), BudgetStatus::OverBudget);
        summary.remaining = 0.0;
        assert_eq!(summary.status(), BudgetStatus::UnderBudget);
    }

    #[test]
    fn breakdown_keeps_first_occurrence_order() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add(Category::Travel, 10.0);
        breakdown.add(Category::Food, 5.0);
        breakdown.add(Category::Travel, 2.5);
        let order: Vec<_> = breakdown.iter().map(|(category, _)| category).collect();
        assert_eq!(order, vec![Category::Travel, Category::Food]);
        assert_eq!(breakdown.get(Category::Travel), Some(12.5));
        assert_eq!(breakdown.get(Category::Study), None);
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add(Category::Food, 30.0);
        breakdown.add(Category::Study, 10.0);
        let shares = breakdown.shares();
        assert!((shares[0].1 - 75.0).abs() < 1e-9);
        assert!((shares[1].1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn shares_of_zero_total_are_zero() {
        let mut breakdown = CategoryBreakdown::new();
        breakdown.add(Category::Others, 0.0);
        assert_eq!(breakdown.shares(), vec![(Category::Others, 0.0)]);
    }
}
