//! Elidune Session - command-line shell around the session guard

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elidune_session::{
    cli::{self, Cli},
    config::AppConfig,
    FileStore, SessionGuard,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    init_tracing(&config);

    let store_path = cli.store.unwrap_or_else(|| config.storage.path.clone());
    let store = FileStore::open(&store_path)?;
    let mut guard = SessionGuard::new(store);

    cli::run(cli.command, &mut guard, &mut std::io::stdout().lock())?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_session={}", config.logging.level).into());

    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
