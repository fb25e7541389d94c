use crate::app_config::AppConfig;
use crate::domain::Sample;
use crate::open_notify::iss_now_response::IssNowResponse;
use crate::sampler::PositionSource;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct OpenNotifyClient {
    client: Client,
    url: String,
}

pub fn new_client(config: &AppConfig) -> Result<OpenNotifyClient, OpenNotifyClientError> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.source().request_timeout())
        .build()?;

    Ok(OpenNotifyClient {
        client,
        url: config.source().url().to_string(),
    })
}

#[async_trait]
impl PositionSource for OpenNotifyClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Sample, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(FetchError::Transport)?;

        let body = response.text().await.map_err(FetchError::Transport)?;
        debug!(body = body.trim(), "🛰️ Received position response");

        let iss_now = serde_json::from_str::<IssNowResponse>(&body).map_err(|source| FetchError::MalformedResponse { source, body })?;
        Sample::try_from(iss_now)
    }
}

#[derive(Error, Debug)]
pub enum OpenNotifyClientError {
    #[error("could not build the HTTP client: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not reach the position endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed position response: {source}")]
    MalformedResponse { source: serde_json::Error, body: String },
    #[error("invalid {field} in position response: '{value}' is not a finite number")]
    InvalidCoordinate { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn client_for(server: &mockito::ServerGuard) -> OpenNotifyClient {
        let config = AppConfigBuilder::new().source_url(format!("{}/iss-now.json", server.url())).build();
        new_client(&config).expect("client should build")
    }

    #[test(tokio::test)]
    async fn fetch_returns_the_parsed_sample() -> Result<(), FetchError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/iss_now_response.json"))
            .create_async()
            .await;

        let client = client_for(&server);
        let sample = client.fetch().await?;

        mock.assert_async().await;
        assert_eq!(sample, Sample::new(1729065600, -41.2964, 112.8417));
        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_reports_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_body("{\"timestamp\": 1729065600, \"iss_position\": ")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.fetch().await;

        assert!(matches!(result, Err(FetchError::MalformedResponse { .. })), "{:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_reports_a_missing_position() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_body("{\"message\": \"success\", \"timestamp\": 1729065600}")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.fetch().await;

        assert!(matches!(result, Err(FetchError::MalformedResponse { .. })), "{:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_reports_non_numeric_coordinates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/iss-now.json")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/iss_now_non_numeric_response.json"))
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.fetch().await;

        assert!(
            matches!(result, Err(FetchError::InvalidCoordinate { field: "latitude", .. })),
            "{:?}",
            result
        );
    }

    #[test(tokio::test)]
    async fn fetch_reports_error_statuses_as_transport_errors() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/iss-now.json").with_status(503).create_async().await;

        let client = client_for(&server);
        let result = client.fetch().await;

        assert!(matches!(result, Err(FetchError::Transport(_))), "{:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_reports_an_unreachable_endpoint() {
        let config = AppConfigBuilder::new().source_url("http://127.0.0.1:1/iss-now.json".to_string()).build();
        let client = new_client(&config).expect("client should build");

        let result = client.fetch().await;

        assert!(matches!(result, Err(FetchError::Transport(_))), "{:?}", result);
    }
}
