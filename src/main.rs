// src/main.rs — Daybreak entry point

use clap::Parser;

use daybreak::cli::{Cli, Commands};
use daybreak::infra::config::Config;
use daybreak::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG / DAYBREAK_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    daybreak::infra::paths::ensure_dirs()?;

    match cli.command {
        Some(Commands::Serve { port }) => daybreak::cli::serve::run_serve(&config, port).await,
        Some(Commands::History { limit }) => {
            daybreak::cli::history::show_history(&config, limit).await
        }
        None => {
            daybreak::cli::plan::run_plan(&config, cli.class_time, cli.location, cli.yes, cli.quiet)
                .await
        }
    }
}
