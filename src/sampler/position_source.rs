use crate::domain::Sample;
use crate::open_notify::FetchError;
use async_trait::async_trait;

/// Somewhere the current position can be read from, one blocking request at a time.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch(&self) -> Result<Sample, FetchError>;
}
