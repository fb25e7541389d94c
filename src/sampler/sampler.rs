use crate::app_config;
use crate::domain::Sample;
use crate::open_notify::FetchError;
use crate::sampler::PositionSource;
use std::future::Future;
use thiserror::Error;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument, warn};

/// The samples collected by one polling run, in arrival order.
#[derive(Debug, PartialEq)]
pub struct Sampling {
    pub samples: Vec<Sample>,
    pub cancelled: bool,
}

/// Polls `source` until the configured duration has elapsed, sleeping the configured interval after
/// every sample. Resolving `shutdown` interrupts the sleep and ends the run with the samples
/// collected so far.
#[instrument(skip_all, fields(duration = ?config.duration(), interval = ?config.interval()))]
pub async fn sample<S, F>(source: &S, config: &app_config::Sampler, shutdown: F) -> Result<Sampling, SamplerError>
where
    S: PositionSource + ?Sized,
    F: Future<Output = ()>,
{
    let duration = config.duration();
    let interval = config.interval();
    let start = Instant::now();
    let mut samples = Vec::new();
    tokio::pin!(shutdown);

    info!("🛰️ Sampling positions for {:?} every {:?}...", duration, interval);
    while start.elapsed() < duration {
        let sample = source.fetch().await.map_err(|e| SamplerError::Fetch {
            source: e,
            collected: samples.len(),
        })?;

        info!(
            timestamp = sample.timestamp,
            "🛰️ Sample #{}: latitude {}, longitude {}",
            samples.len() + 1,
            sample.latitude,
            sample.longitude
        );
        samples.push(sample);

        debug!("💤 Sleeping {:?}...", interval);
        tokio::select! {
            _ = sleep(interval) => {}
            _ = &mut shutdown => {
                warn!("🛑 Sampling interrupted after {} sample(s)", samples.len());
                return Ok(Sampling { samples, cancelled: true });
            }
        }
    }

    info!("🛰️ Sampling positions... OK, {} collected", samples.len());
    Ok(Sampling { samples, cancelled: false })
}

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("{source} (after {collected} sample(s))")]
    Fetch { source: FetchError, collected: usize },
}

impl SamplerError {
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            SamplerError::Fetch { source, .. } => source,
        }
    }
}
