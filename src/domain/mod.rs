//! Plain data types shared by the stores, the aggregator and the engine.

pub mod category;
pub mod entry;
pub mod period;
pub mod summary;

pub use category::Category;
pub use entry::{parse_amount, parse_decimal, validate_amount, ExpenseEntry, DATE_FORMAT};
pub use period::Period;
pub use summary::{BudgetStatus, CategoryBreakdown, Summary};
