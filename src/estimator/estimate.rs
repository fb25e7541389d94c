use crate::app_config;
use crate::domain::{AverageSpeed, DerivedRecord, Interval, Sample};
use std::time::Duration;
use tracing::{debug, instrument};

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, PartialEq)]
pub struct Estimate {
    pub records: Vec<DerivedRecord>,
    pub average_speed: AverageSpeed,
}

/// Derives the distance travelled between consecutive samples and the speed over each polling
/// interval. Returns one record per sample; only the first lacks an interval.
#[instrument(skip_all, fields(samples = samples.len()))]
pub fn estimate(samples: &[Sample], config: &app_config::Estimator, polling_interval: Duration) -> Estimate {
    let formula = config.formula();
    let orbital_radius_km = config.orbital_radius_km();
    let hours = polling_interval.as_secs_f64() / SECONDS_PER_HOUR;

    let records = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| match i.checked_sub(1).map(|previous| &samples[previous]) {
            None => DerivedRecord::first(*sample),
            Some(previous) => {
                let separation = formula.separation(previous, sample);
                let distance_km = separation.central_angle * orbital_radius_km;

                DerivedRecord::following(
                    *sample,
                    Interval {
                        delta_longitude_rad: separation.delta_longitude,
                        delta_latitude_rad: separation.delta_latitude,
                        distance_km,
                        speed_kmh: distance_km / hours,
                    },
                )
            }
        })
        .collect::<Vec<_>>();

    let speeds = records.iter().filter_map(DerivedRecord::speed_kmh).collect::<Vec<_>>();
    let average_speed = AverageSpeed::from_speeds(&speeds, samples.len());
    debug!(?formula, "📐 Estimated {} interval(s), average speed {}", speeds.len(), average_speed);

    Estimate { records, average_speed }
}
