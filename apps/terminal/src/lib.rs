pub mod commands;
pub mod config;
pub mod shell;
pub mod state;
pub mod store;
pub mod vocabulary;

use config::AppConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shell::Shell;
use state::AppState;
use store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();

    // Ensure data directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!(path = %config.db_path.display(), "Opening vocabulary store...");
    let store = SqliteStore::open(&config.db_path)?;

    let rng = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed quiz seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let state = AppState::new(store, rng);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&state, stdin.lock(), stdout.lock());
    shell.run().await?;

    tracing::info!("Exiting");
    Ok(())
}
