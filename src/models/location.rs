//! Location samples and distance math.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Row in the `locations` table; one per identity, upserted in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSample {
    pub id: String,
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub is_sharing: bool,
    pub updated_at: DateTime<Utc>,
}

impl LocationSample {
    /// Great-circle distance to another sample, in kilometers.
    pub fn distance_km(&self, other: &LocationSample) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Haversine distance between two coordinate pairs, in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_zero_distance_for_equal_points() {
        assert_eq!(haversine_km(31.23, 121.47, 31.23, 121.47), 0.0);
    }

    #[rstest]
    // Shanghai -> Beijing, roughly 1068 km
    #[case(31.2304, 121.4737, 39.9042, 116.4074, 1067.0, 5.0)]
    // London -> Paris, roughly 344 km
    #[case(51.5074, -0.1278, 48.8566, 2.3522, 343.5, 2.0)]
    // Near-antipodal pair, close to half the circumference
    #[case(0.0, 0.0, 0.0, 179.9, 20003.0, 15.0)]
    fn test_known_distances(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] expected: f64,
        #[case] tolerance: f64,
    ) {
        let got = haversine_km(lat1, lon1, lat2, lon2);
        assert!(
            (got - expected).abs() < tolerance,
            "expected ~{} km, got {} km",
            expected,
            got
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = haversine_km(31.2, 121.5, 39.9, 116.4);
        let b = haversine_km(39.9, 116.4, 31.2, 121.5);
        assert!((a - b).abs() < 1e-9);
    }
}
