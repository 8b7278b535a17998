//! WebHands - attribute resolution and key-sequence typing for browser automation.
//!
//! Main entry point for the WebHands CLI.

mod cli;
mod cmd_browser;
mod cmd_keys;

use std::path::Path;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use webhands_config::{Config, ConfigLoader};

use cli::{Cli, Commands};

fn init_tracing(default_level: &str, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("webhands")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes on drop, so it must live as long as the process.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

fn load_config(path: &Path) -> Config {
    match ConfigLoader::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}; using defaults", path.display(), e);
            Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config);
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.log.dir.as_deref().map(|d| ConfigLoader::expand_path(d).into()));
    init_tracing(&config.log.level, log_dir.as_deref())?;

    match cli.command {
        Commands::Keys { sequences, persist } => cmd_keys::keys(&sequences, persist),
        Commands::CheckConfig => cmd_keys::check_config(&cli.config),
        Commands::Attr {
            url,
            selector,
            name,
        } => cmd_browser::attr(&config, &url, &selector, &name).await,
        Commands::Type {
            url,
            selector,
            persist,
            no_persist,
            sequences,
        } => {
            let persist =
                cli::resolve_persist(persist, no_persist, config.keyboard.persist_modifiers);
            cmd_browser::type_keys(&config, &url, &selector, &sequences, persist).await
        }
    }
}
