//! Great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Treats the Earth as a sphere of radius [`EARTH_RADIUS_KM`]. Good to a
/// few tenths of a percent, which is plenty for a "within 160 km" search.
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn identical_points_give_zero() {
        let p = coord(36.1, -115.1);
        assert_eq!(haversine_distance_km(p, p), 0.0);
    }

    #[test]
    fn antipodal_points_give_half_circumference() {
        let d = haversine_distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(
            ((d - expected) / expected).abs() < 1e-4,
            "expected ~{expected} km, got {d}"
        );
    }

    #[test]
    fn known_distance_vegas_to_los_angeles() {
        // Las Vegas to Los Angeles is roughly 370 km as the crow flies
        let d = haversine_distance_km(coord(36.17, -115.14), coord(34.05, -118.24));
        assert!(d > 350.0 && d < 400.0, "expected ~370 km, got {d}");
    }
}
