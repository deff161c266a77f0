//! Entry point for the national monuments site

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use natmon_core::StateMatch;
use natmon_data::SqliteStore;
use natmon_server::{router, AppState};
use tracing::info;

mod seed;

#[derive(Parser)]
#[command(name = "natmon")]
#[command(about = "Read-only website for browsing national monuments", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, default_value = "monuments.db")]
    db: PathBuf,

    /// Table holding the monument rows
    #[arg(long, default_value = "monuments")]
    table: String,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Match state pages by raw substring instead of whole fragments
    /// (behavior of the site this dataset came from)
    #[arg(long)]
    legacy_state_match: bool,

    /// Create and seed a small demo database at --db if it does not exist
    #[arg(long)]
    seed_demo: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.seed_demo && !cli.db.exists() {
        seed::create_demo_database(&cli.db, &cli.table)
            .with_context(|| format!("failed to seed {}", cli.db.display()))?;
        info!(db = %cli.db.display(), "seeded demo database");
    }

    let store = SqliteStore::new(&cli.db, &cli.table)
        .await
        .with_context(|| format!("failed to open {}", cli.db.display()))?;
    let state = AppState {
        store: Arc::new(store),
        state_match: if cli.legacy_state_match {
            StateMatch::LegacySubstring
        } else {
            StateMatch::Exact
        },
    };

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!(addr = %cli.bind, "serving monuments site");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
