pub mod build_info;
pub mod paths;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the quiet default.
/// Call through [`crate::init`], which guards against repeated installs.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expense_ledger=warn"));

    // A subscriber installed by an embedding application wins.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
