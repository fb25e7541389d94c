use crate::cli::Cli;
use crate::estimator::Formula;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "http://api.open-notify.org/iss-now.json";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    sampler: Sampler,
    source: Source,
    estimator: Estimator,
    output: Output,
}

impl AppConfig {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .set_default("sampler.duration_secs", 15.0)?
            .set_default("sampler.interval_secs", 5)?
            .set_default("source.url", DEFAULT_SOURCE_URL)?
            .set_default("source.request_timeout", "10s")?
            .set_default("estimator.earth_radius_km", 6371.0)?
            .set_default("estimator.orbital_altitude_km", 400.0)?
            .set_default("estimator.formula", "haversine")?
            .set_default("output.directory", ".")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(
                config::Environment::with_prefix("ISS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("sampler.duration_secs", cli.duration)?
            .set_override_option("sampler.interval_secs", cli.interval.map(|secs| secs as i64))?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.sampler.duration_secs.is_finite() {
            return Err(ConfigError::Message(format!(
                "invalid sampler duration: {}, must be a finite number of seconds",
                self.sampler.duration_secs
            )));
        }

        if self.sampler.duration_secs > 0.0 && Duration::try_from_secs_f64(self.sampler.duration_secs).is_err() {
            return Err(ConfigError::Message(format!(
                "invalid sampler duration: {}, too large to represent",
                self.sampler.duration_secs
            )));
        }

        if self.sampler.interval_secs == 0 {
            return Err(ConfigError::Message("invalid sampler interval: 0, must be at least 1 second".to_string()));
        }

        if !(self.estimator.earth_radius_km > 0.0 && self.estimator.orbital_altitude_km >= 0.0) {
            return Err(ConfigError::Message(format!(
                "invalid orbit: earth radius {} km, altitude {} km, radius must be positive and altitude non-negative",
                self.estimator.earth_radius_km, self.estimator.orbital_altitude_km
            )));
        }

        Ok(())
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

#[derive(Debug, Deserialize)]
pub struct Sampler {
    duration_secs: f64,
    interval_secs: u64,
}

impl Sampler {
    /// Total wall-clock budget of the polling loop. Zero or negative durations collect nothing.
    pub fn duration(&self) -> Duration {
        if self.duration_secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.duration_secs).unwrap_or(Duration::MAX)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct Source {
    url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Source {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Estimator {
    earth_radius_km: f64,
    orbital_altitude_km: f64,
    formula: Formula,
}

impl Estimator {
    pub fn orbital_radius_km(&self) -> f64 {
        self.earth_radius_km + self.orbital_altitude_km
    }

    pub fn formula(&self) -> Formula {
        self.formula
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    directory: String,
}

impl Output {
    pub fn directory(&self) -> &Path {
        Path::new(&self.directory)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                sampler: Sampler {
                    duration_secs: 15.0,
                    interval_secs: 5,
                },
                source: Source {
                    url: "http://iss.url/iss-now.json".to_string(),
                    request_timeout: Duration::from_secs(1),
                },
                estimator: Estimator {
                    earth_radius_km: 6371.0,
                    orbital_altitude_km: 400.0,
                    formula: Formula::Haversine,
                },
                output: Output {
                    directory: ".".to_string(),
                },
            },
        }
    }

    pub fn source_url(mut self, url: String) -> Self {
        self.config.source.url = url;
        self
    }

    pub fn duration_secs(mut self, duration_secs: f64) -> Self {
        self.config.sampler.duration_secs = duration_secs;
        self
    }

    pub fn interval_secs(mut self, interval_secs: u64) -> Self {
        self.config.sampler.interval_secs = interval_secs;
        self
    }

    pub fn formula(mut self, formula: Formula) -> Self {
        self.config.estimator.formula = formula;
        self
    }

    pub fn output_directory(mut self, directory: &Path) -> Self {
        self.config.output.directory = directory.to_string_lossy().into_owned();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
