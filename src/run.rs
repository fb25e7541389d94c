use crate::app_config::AppConfig;
use crate::estimator::{Estimate, estimate};
use crate::open_notify::{FetchError, OpenNotifyClientError};
use crate::output::{OutputError, write_csv};
use crate::sampler::{PositionSource, SamplerError, sample};
use chrono::Utc;
use config::ConfigError;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct RunOutcome {
    pub estimate: Estimate,
    pub csv_path: PathBuf,
    pub cancelled: bool,
}

/// Samples positions, estimates the speed and persists the records. A fetch error aborts the run
/// before anything is written.
#[instrument(skip_all)]
pub async fn run<S, F>(source: &S, config: &AppConfig, shutdown: F) -> Result<RunOutcome, RunError>
where
    S: PositionSource + ?Sized,
    F: Future<Output = ()>,
{
    let sampling = sample(source, config.sampler(), shutdown).await?;

    info!("📐 Estimating speed over {} sample(s)...", sampling.samples.len());
    let estimate = estimate(&sampling.samples, config.estimator(), config.sampler().interval());
    info!(
        average_speed_kmh = estimate.average_speed.as_kmh(),
        "📐 Estimating speed... OK, {}",
        estimate.average_speed
    );

    let completed_at = Utc::now().timestamp();
    let csv_path = write_csv(config.output().directory(), completed_at, &estimate.records)?;

    Ok(RunOutcome {
        estimate,
        csv_path,
        cancelled: sampling.cancelled,
    })
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] OpenNotifyClientError),
    #[error(transparent)]
    Sampling(#[from] SamplerError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl RunError {
    /// Process exit code, distinct per failure kind and clear of clap's usage error code 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Sampling(e) => match e.fetch_error() {
                FetchError::Transport(_) => 3,
                FetchError::MalformedResponse { .. } => 4,
                FetchError::InvalidCoordinate { .. } => 5,
            },
            RunError::Output(_) => 6,
            RunError::Client(_) => 7,
            RunError::Config(_) => 8,
        }
    }
}
