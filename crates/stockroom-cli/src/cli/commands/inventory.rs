//! Interactive inventory command.

use anyhow::{Context, Result};
use stockroom_core::{config, logging};

pub async fn run(config: &config::Config) -> Result<()> {
    // Held until exit so the non-blocking writer flushes.
    let _log_guard = logging::init().context("initialize logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "stockroom starting");

    stockroom_tui::run_interactive(config)
        .await
        .context("interactive session failed")
}
