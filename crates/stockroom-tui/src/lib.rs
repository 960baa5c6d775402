//! Full-screen TUI for stockroom.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
pub use features::{credentials, inventory, session, statusline};
pub use runtime::{Backends, TuiRuntime};
use stockroom_core::backend::AuthGateway;
use stockroom_core::backend::firebase::{self, FirebaseAuth, FirestoreStore};
use stockroom_core::config::Config;

/// Runs the interactive inventory UI against the configured Firebase project.
///
/// # Errors
/// Returns an error if there is no terminal, the Firebase settings are
/// incomplete, or the terminal fails.
pub async fn run_interactive(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("stockroom requires an interactive terminal.");
    }
    config.firebase.validate()?;

    let http = firebase::http_client()?;
    let auth = FirebaseAuth::new(&config.firebase, http.clone());
    let gateway = AuthGateway::new(Arc::new(auth));
    let store = FirestoreStore::new(&config.firebase, http, gateway.clone());

    tracing::info!(
        project = %config.firebase.project_id,
        collection = %config.firebase.collection,
        "Starting TUI"
    );

    let mut runtime = TuiRuntime::new(
        config.ui.clone(),
        Backends {
            gateway,
            store: Arc::new(store),
            collection: config.firebase.collection.clone(),
        },
    )
    .context("Failed to start TUI")?;
    runtime.run()?;
    // Restore the terminal before printing.
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
