use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

/// Haversine distance between two coordinates in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        let point = Coordinate::new(51.5, -0.12);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert!((a.distance_to(&b) - 111.195).abs() < 0.01);
    }

    #[test]
    fn distance_is_symmetric() {
        let paris = Coordinate::new(48.8566, 2.3522);
        let berlin = Coordinate::new(52.52, 13.405);
        let there = haversine_km(paris, berlin);
        let back = haversine_km(berlin, paris);
        assert!((there - back).abs() < 1e-9);
        assert!((there - 877.5).abs() < 2.0);
    }
}
