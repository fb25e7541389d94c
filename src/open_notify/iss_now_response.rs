use crate::domain::Sample;
use crate::open_notify::FetchError;
use serde::Deserialize;

// API: http://open-notify.org/Open-Notify-API/ISS-Location-Now/
#[derive(Debug, Deserialize)]
pub struct IssNowResponse {
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

/// Coordinates arrive as strings, e.g. `"latitude": "-41.2964"`.
#[derive(Debug, Deserialize)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

impl TryFrom<IssNowResponse> for Sample {
    type Error = FetchError;

    fn try_from(response: IssNowResponse) -> Result<Self, Self::Error> {
        let latitude = parse_coordinate("latitude", response.iss_position.latitude)?;
        let longitude = parse_coordinate("longitude", response.iss_position.longitude)?;
        Ok(Sample::new(response.timestamp, latitude, longitude))
    }
}

fn parse_coordinate(field: &'static str, value: String) -> Result<f64, FetchError> {
    match value.trim().parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => Ok(degrees),
        _ => Err(FetchError::InvalidCoordinate { field, value }),
    }
}
