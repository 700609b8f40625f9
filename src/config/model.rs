use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::utils::paths;

pub const EXPENSES_FILE: &str = "expenses.csv";
pub const LIMIT_FILE: &str = "limit.txt";
pub const PERIOD_FILE: &str = "month.txt";

/// What to do when the persisted limit is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LimitRecovery {
    /// Log the corruption, rewrite the limit as 0 and carry on.
    #[default]
    Reset,
    /// Surface the corruption to the caller.
    Fail,
}

impl fmt::Display for LimitRecovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LimitRecovery::Reset => "reset",
            LimitRecovery::Fail => "fail",
        })
    }
}

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Symbol printed in front of amounts. Display only; amounts are unit-less.
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub limit_recovery: LimitRecovery,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for the ledger artifacts. Defaults to the app data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            limit_recovery: LimitRecovery::default(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Directory holding the ledger artifacts.
    pub fn resolve_data_dir(&self, app_dir: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| app_dir.to_path_buf())
    }
}

/// Locations and policies the ledger engine is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub data_dir: PathBuf,
    pub expenses_path: PathBuf,
    pub limit_path: PathBuf,
    pub period_path: PathBuf,
    pub limit_recovery: LimitRecovery,
}

impl EngineConfig {
    /// Uses the default artifact names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Self {
            expenses_path: data_dir.join(EXPENSES_FILE),
            limit_path: data_dir.join(LIMIT_FILE),
            period_path: data_dir.join(PERIOD_FILE),
            data_dir,
            limit_recovery: LimitRecovery::default(),
        }
    }

    /// Builds engine settings from user preferences, resolving the data directory.
    pub fn from_config(config: &Config) -> Self {
        let dir = config.resolve_data_dir(&paths::app_data_dir());
        Self::in_dir(dir).with_limit_recovery(config.limit_recovery)
    }

    pub fn with_limit_recovery(mut self, policy: LimitRecovery) -> Self {
        self.limit_recovery = policy;
        self
    }
}
