use crate::domain::DerivedRecord;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

const HEADERS: [&str; 7] = ["Timestamp", "Latitude", "Longitude", "Diff_Lon", "Diff_Lat", "Distance(km)", "Speed(km/hr)"];

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Timestamp")]
    timestamp: i64,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Diff_Lon")]
    diff_lon: Option<f64>,
    #[serde(rename = "Diff_Lat")]
    diff_lat: Option<f64>,
    #[serde(rename = "Distance(km)")]
    distance_km: Option<f64>,
    #[serde(rename = "Speed(km/hr)")]
    speed_kmh: Option<f64>,
}

impl From<&DerivedRecord> for CsvRow {
    fn from(record: &DerivedRecord) -> Self {
        CsvRow {
            timestamp: record.sample.timestamp,
            latitude: record.sample.latitude,
            longitude: record.sample.longitude,
            diff_lon: record.interval.map(|interval| interval.delta_longitude_rad),
            diff_lat: record.interval.map(|interval| interval.delta_latitude_rad),
            distance_km: record.distance_km(),
            speed_kmh: record.speed_kmh(),
        }
    }
}

pub fn file_name(completed_at: i64) -> String {
    format!("{}_data.csv", completed_at)
}

/// Writes one row per record to `<directory>/<completed_at>_data.csv`. Undefined interval fields
/// are left empty. The header row is written even when there are no records.
#[instrument(skip(records), fields(records = records.len()))]
pub fn write_csv(directory: &Path, completed_at: i64, records: &[DerivedRecord]) -> Result<PathBuf, OutputError> {
    let path = directory.join(file_name(completed_at));
    info!("💾 Writing {}...", path.display());

    std::fs::create_dir_all(directory).map_err(|source| OutputError::Io {
        source,
        path: directory.to_path_buf(),
    })?;

    let csv_error = |source| OutputError::Csv { source, path: path.clone() };
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&path).map_err(csv_error)?;

    writer.write_record(HEADERS).map_err(csv_error)?;
    for record in records {
        writer.serialize(CsvRow::from(record)).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io { source, path: path.clone() })?;

    info!("💾 Writing {}... OK, {} row(s)", path.display(), records.len());
    Ok(path)
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not write '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("could not write '{}': {source}", path.display())]
    Csv { source: csv::Error, path: PathBuf },
}
