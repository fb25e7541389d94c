/// One timestamped position observation, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: i64, // Unix seconds
    pub latitude: f64,
    pub longitude: f64,
}

impl Sample {
    pub fn new(timestamp: i64, latitude: f64, longitude: f64) -> Self {
        Sample {
            timestamp,
            latitude,
            longitude,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}
