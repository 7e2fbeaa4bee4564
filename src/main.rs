use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use carousel_tui::config::Config;
use carousel_tui::logging;
use carousel_tui::ui;

/// Terminal carousel for a deck of text slides.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event-loop tick rate in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms;
        config.validate()?;
    }

    tracing::info!(slides = config.slides.len(), "starting carousel");
    ui::runtime::run(config)?;
    Ok(())
}
