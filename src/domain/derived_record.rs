use crate::domain::Sample;

/// Quantities derived from a sample and its predecessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub delta_longitude_rad: f64,
    pub delta_latitude_rad: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
}

/// A sample together with the interval leading up to it. The first record of a sequence has no
/// predecessor, so its interval is `None` rather than zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedRecord {
    pub sample: Sample,
    pub interval: Option<Interval>,
}

impl DerivedRecord {
    pub fn first(sample: Sample) -> Self {
        DerivedRecord { sample, interval: None }
    }

    pub fn following(sample: Sample, interval: Interval) -> Self {
        DerivedRecord {
            sample,
            interval: Some(interval),
        }
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.interval.map(|interval| interval.distance_km)
    }

    pub fn speed_kmh(&self) -> Option<f64> {
        self.interval.map(|interval| interval.speed_kmh)
    }
}
