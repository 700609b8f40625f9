#![doc(test(attr(deny(warnings))))]

//! Expense Ledger keeps a personal monthly expense ledger in flat files: dated,
//! categorized expenses, a monthly spending limit, totals, and a category
//! breakdown. The ledger resets itself when the calendar month changes.
//!
//! ```no_run
//! use expense_ledger::{config::EngineConfig, core::LedgerEngine};
//!
//! let mut engine = LedgerEngine::open(&EngineConfig::in_dir("/tmp/ledger"));
//! engine.initialize()?;
//! engine.set_limit("1000")?;
//! engine.add_expense("250", "Food", None)?;
//! let summary = engine.get_summary()?;
//! assert_eq!(summary.remaining, 750.0);
//! # Ok::<(), expense_ledger::errors::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::LedgerEngine;
pub use errors::{LedgerError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!(build = %utils::build_info::current().summary_line(), "Expense Ledger tracing initialized.");
    });
}
