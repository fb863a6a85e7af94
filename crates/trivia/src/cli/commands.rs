//! # CLI Layer
//!
//! Responsibilities:
//! 1. **Argument Parsing**: shell arguments become a typed [`Commands`]
//! 2. **Context Setup**: configuration and the log subscriber
//! 3. **Dispatch**: each command opens its store and calls the API facade
//! 4. **Output**: short styled status lines on stdout; logs go to stderr

use super::setup::{parse_cli, Commands};
use super::styles;
use crate::server;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use triviaapp::api::TriviaApi;
use triviaapp::config::TriviaConfig;
use triviaapp::store::memory::InMemoryStore;
use triviaapp::store::sqlite::SqliteStore;
use triviaapp::store::DataStore;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    let config = TriviaConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Serve { bind, db, memory } => handle_serve(config, bind, db, memory),
        Commands::Init { db } => handle_init(&config, db),
        Commands::Import { file, db } => handle_import(&config, &file, db),
    }
}

/// `RUST_LOG` wins over the configured directive; `--verbose` wins over both.
fn init_logging(config: &TriviaConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn database_path(config: &TriviaConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => Ok(config.database_path()?),
    }
}

fn open_store(path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(path).with_context(|| format!("cannot open database {}", path.display()))
}

fn handle_serve(
    config: TriviaConfig,
    bind: Option<String>,
    db: Option<PathBuf>,
    memory: bool,
) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.bind.clone());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    if memory {
        let mut store = InMemoryStore::new();
        store.seed_default_categories()?;
        info!("serving an in-memory question bank");
        return runtime.block_on(serve(TriviaApi::with_config(store, &config), &bind));
    }

    let path = database_path(&config, db)?;
    let mut store = open_store(&path)?;
    let seeded = store.seed_default_categories()?;
    if seeded > 0 {
        info!(count = seeded, "seeded default categories");
    }
    info!(database = %path.display(), "serving question bank");
    runtime.block_on(serve(TriviaApi::with_config(store, &config), &bind))
}

async fn serve<S: DataStore + Send + 'static>(api: TriviaApi<S>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("cannot listen on {}", bind))?;
    let address = listener.local_addr()?;
    println!(
        "{} {}",
        styles::success().apply_to("Listening on"),
        styles::highlight().apply_to(format!("http://{}", address))
    );
    server::serve(listener, api).await
}

fn handle_init(config: &TriviaConfig, db: Option<PathBuf>) -> Result<()> {
    let path = database_path(config, db)?;
    let mut api = TriviaApi::with_config(open_store(&path)?, config);
    let seeded = api.seed_default_categories()?;

    println!(
        "{} {}",
        styles::success().apply_to("Initialized"),
        styles::highlight().apply_to(path.display())
    );
    if seeded > 0 {
        println!("  seeded {} default categories", seeded);
    } else {
        println!(
            "  {}",
            styles::muted().apply_to("categories already present, nothing seeded")
        );
    }
    Ok(())
}

fn handle_import(config: &TriviaConfig, file: &Path, db: Option<PathBuf>) -> Result<()> {
    let path = database_path(config, db)?;
    let mut api = TriviaApi::with_config(open_store(&path)?, config);
    let report = api
        .import_file(file)
        .with_context(|| format!("failed to import {}", file.display()))?;

    println!(
        "{} {} categories and {} questions into {}",
        styles::success().apply_to("Imported"),
        report.categories,
        report.questions,
        styles::highlight().apply_to(path.display())
    );
    Ok(())
}
