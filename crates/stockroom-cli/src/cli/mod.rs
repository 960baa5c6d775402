//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use stockroom_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Track named items and their quantities in Firebase")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Firestore collection to use (overrides config)
    #[arg(long, env = "STOCKROOM_COLLECTION", value_name = "NAME")]
    collection: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        collection,
    } = cli;

    // default to the inventory UI
    let Some(command) = command else {
        let mut config = config::Config::load().context("load config")?;
        if let Some(collection) = collection {
            config.firebase.collection = collection;
        }
        return commands::inventory::run(&config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
