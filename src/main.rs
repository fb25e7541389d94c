use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::output::render_summary;
use crate::run::{RunError, RunOutcome, run};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod app_config;
mod cli;
mod domain;
mod estimator;
mod open_notify;
mod output;
mod run;
mod sampler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    let cli = Cli::parse();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match start(&cli).await {
        Ok(outcome) => {
            if outcome.cancelled {
                warn!("🛑 Sampling was interrupted, the estimate covers a partial run");
            }
            info!("💾 Records saved to {}", outcome.csv_path.display());
            println!("{}", render_summary(&outcome.estimate));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn start(cli: &Cli) -> Result<RunOutcome, RunError> {
    let config = AppConfig::load(cli)?;
    info!("✅  Loaded configuration");

    let client = open_notify::new_client(&config)?;
    info!("✅  Initialized client for {}", config.source().url());

    run(&client, &config, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Could not listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
