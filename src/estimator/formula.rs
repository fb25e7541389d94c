use crate::domain::Sample;
use serde::Deserialize;
use std::f64::consts::{PI, TAU};

/// How the angle between two consecutive positions is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Great-circle haversine between both positions.
    #[default]
    Haversine,
    /// Reproduces the historical estimate: the longitude delta is taken from the latitudes after
    /// converting the already radian latitudes to radians a second time, and the current latitude
    /// is used for both cosine factors.
    Legacy,
}

/// Angular separation between two positions, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
    pub delta_longitude: f64,
    pub delta_latitude: f64,
    pub central_angle: f64,
}

impl Formula {
    pub fn separation(&self, previous: &Sample, current: &Sample) -> Separation {
        let delta_latitude = current.latitude_rad() - previous.latitude_rad();

        let (delta_longitude, cos_product) = match self {
            Formula::Haversine => (
                normalize_pi(current.longitude_rad() - previous.longitude_rad()),
                previous.latitude_rad().cos() * current.latitude_rad().cos(),
            ),
            Formula::Legacy => (
                current.latitude_rad().to_radians() - previous.latitude_rad().to_radians(),
                current.latitude_rad().cos().powi(2),
            ),
        };

        // Square of half the chord length between the points
        let a = (delta_latitude / 2.0).sin().powi(2) + cos_product * (delta_longitude / 2.0).sin().powi(2);
        let central_angle = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        Separation {
            delta_longitude,
            delta_latitude,
            central_angle,
        }
    }
}

/// Maps an angle to [-π, π).
fn normalize_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-12;

    #[rstest]
    #[case(Sample::new(0, 0.0, 0.0), Sample::new(5, 0.0, 10.0), 10f64.to_radians())]
    #[case(Sample::new(0, 0.0, 0.0), Sample::new(5, 90.0, 0.0), PI / 2.0)]
    #[case(Sample::new(0, 0.0, 0.0), Sample::new(5, 0.0, 180.0), PI)]
    #[case(Sample::new(0, 0.0, 179.0), Sample::new(5, 0.0, -179.0), 2f64.to_radians())]
    #[case(Sample::new(0, 51.5, -0.12), Sample::new(5, 51.5, -0.12), 0.0)]
    fn haversine_central_angle(#[case] previous: Sample, #[case] current: Sample, #[case] expected: f64) {
        let separation = Formula::Haversine.separation(&previous, &current);

        assert!(
            (separation.central_angle - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            separation.central_angle
        );
    }

    #[test]
    fn haversine_reports_the_shortest_longitude_delta_across_the_antimeridian() {
        let separation = Formula::Haversine.separation(&Sample::new(0, 0.0, 179.0), &Sample::new(5, 0.0, -179.0));

        assert!((separation.delta_longitude - 2f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn legacy_derives_the_longitude_delta_from_latitudes() {
        let separation = Formula::Legacy.separation(&Sample::new(0, 10.0, 0.0), &Sample::new(5, 20.0, 45.0));

        assert!((separation.delta_latitude - 10f64.to_radians()).abs() < EPSILON);
        assert!((separation.delta_longitude - 10f64.to_radians().to_radians()).abs() < EPSILON);
        assert!((separation.delta_longitude - 0.0030461741978670856).abs() < EPSILON);
        assert!((separation.central_angle - 0.17455651647860934).abs() < EPSILON);
    }

    #[test]
    fn legacy_ignores_pure_longitude_movement() {
        let separation = Formula::Legacy.separation(&Sample::new(0, 0.0, 0.0), &Sample::new(5, 0.0, 10.0));

        assert_eq!(separation.delta_longitude, 0.0);
        assert_eq!(separation.central_angle, 0.0);
    }

    #[test]
    fn legacy_uses_the_current_latitude_for_both_cosines() {
        let previous = Sample::new(0, 0.0, 0.0);
        let current = Sample::new(5, 10.0, 0.0);
        let delta = 10f64.to_radians();
        let a = (delta / 2.0).sin().powi(2) + current.latitude_rad().cos().powi(2) * (delta.to_radians() / 2.0).sin().powi(2);

        let separation = Formula::Legacy.separation(&previous, &current);

        assert!((separation.central_angle - 2.0 * a.sqrt().asin()).abs() < EPSILON);
    }

    #[rstest]
    #[case(Formula::Haversine)]
    #[case(Formula::Legacy)]
    fn central_angle_is_finite_and_non_negative(#[case] formula: Formula) {
        let positions = [(-90.0, -180.0), (-45.5, 12.25), (0.0, 0.0), (33.3, 179.9), (89.99, -0.01), (90.0, 180.0)];

        for (lat1, lon1) in positions {
            for (lat2, lon2) in positions {
                let separation = formula.separation(&Sample::new(0, lat1, lon1), &Sample::new(5, lat2, lon2));
                assert!(separation.central_angle.is_finite() && separation.central_angle >= 0.0);
                assert!(separation.delta_longitude.is_finite() && separation.delta_latitude.is_finite());
            }
        }
    }

    #[test]
    fn deserializes_from_lowercase_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::from_str::<Formula>("\"haversine\"")?, Formula::Haversine);
        assert_eq!(serde_json::from_str::<Formula>("\"legacy\"")?, Formula::Legacy);
        Ok(())
    }
}
