use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AverageSpeed {
    Kmh(f64),
    /// Fewer than two samples were collected, so no interval exists to average over.
    InsufficientData { samples: usize },
}

impl AverageSpeed {
    pub fn from_speeds(speeds: &[f64], samples: usize) -> Self {
        if speeds.is_empty() {
            return AverageSpeed::InsufficientData { samples };
        }
        AverageSpeed::Kmh(speeds.iter().sum::<f64>() / speeds.len() as f64)
    }

    pub fn as_kmh(&self) -> Option<f64> {
        match self {
            AverageSpeed::Kmh(speed) => Some(*speed),
            AverageSpeed::InsufficientData { .. } => None,
        }
    }
}

impl Display for AverageSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AverageSpeed::Kmh(speed) => write!(f, "{:.6} km/hr", speed),
            AverageSpeed::InsufficientData { samples } => {
                write!(f, "insufficient data ({} sample(s), at least 2 required)", samples)
            }
        }
    }
}
