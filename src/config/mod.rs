//! User preferences and engine construction settings.

pub mod manager;
pub mod model;

pub use manager::ConfigManager;
pub use model::{Config, EngineConfig, LimitRecovery, EXPENSES_FILE, LIMIT_FILE, PERIOD_FILE};
