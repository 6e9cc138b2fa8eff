use anyhow::Result;
use clap::Parser;
use tracing::info;

mod analysis;
mod chart;
mod config;
mod error;
mod frame;
mod stats;

use config::Config;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    info!(
        "Reading data from '{}', writing charts to '{}'",
        config.data_dir.display(),
        config.out_dir.display()
    );

    analysis::run_all(&config)?;

    info!("Report complete");
    Ok(())
}
