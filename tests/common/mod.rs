#![allow(dead_code)]

use std::path::Path;

use expense_ledger::{
    config::EngineConfig,
    core::{FixedClock, LedgerEngine},
};
use tempfile::TempDir;

/// Engine over `dir` with the clock frozen on the given date. Not yet initialized.
pub fn engine_on(dir: &Path, year: i32, month: u32, day: u32) -> LedgerEngine {
    LedgerEngine::with_clock(&EngineConfig::in_dir(dir), FixedClock::ymd(year, month, day))
}

/// Creates an initialized engine backed by a fresh temporary directory.
/// The returned guard keeps the directory alive for the test.
pub fn setup_engine(year: i32, month: u32, day: u32) -> (TempDir, LedgerEngine) {
    let temp = TempDir::new().expect("create temp dir");
    let mut engine = engine_on(temp.path(), year, month, day);
    engine.initialize().expect("initialize engine");
    (temp, engine)
}
