//! Domain types representing expense categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Fixed set of categories an expense can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Study,
    Entertainment,
    Others,
}

impl Category {
    /// Every category in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Study,
        Category::Entertainment,
        Category::Others,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Study => "Study",
            Category::Entertainment => "Entertainment",
            Category::Others => "Others",
        }
    }

    /// Returns the known category closest to `input`, if any is reasonably close.
    pub fn suggest(input: &str) -> Option<Category> {
        let needle = input.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .map(|category| {
                let score =
                    strsim::jaro_winkler(&needle, &category.name().to_ascii_lowercase());
                (*category, score)
            })
            .filter(|(_, score)| *score >= 0.75)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(category, _)| category)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::Validation("category is required".into()));
        }
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let mut message = format!("unknown category `{}`", trimmed);
                if let Some(hint) = Category::suggest(trimmed) {
                    message.push_str(&format!(" (did you mean `{}`?)", hint));
                }
                LedgerError::Validation(message)
            })
    }
}
