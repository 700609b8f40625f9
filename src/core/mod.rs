//! Ledger engine: rollover detection, aggregation and the facade over the stores.

pub mod aggregator;
pub mod ledger_engine;
pub mod period_tracker;
pub mod time;

pub use aggregator::Aggregator;
pub use ledger_engine::{EngineState, LedgerEngine};
pub use period_tracker::{PeriodTracker, Transition};
pub use time::{Clock, FixedClock, SystemClock};
