//! Planner configuration.

/// Configuration parameters for fuel-stop planning.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Maximum drivable distance per fuel leg, in miles.
    /// One refueling sample is taken per leg.
    pub max_range_miles: f64,

    /// Assumed fuel economy in miles per gallon.
    /// Deliberately pessimistic: the fleet this was built for is trucks.
    pub miles_per_gallon: f64,

    /// Radius around each sample point to search for stations, in km.
    /// 160 km is roughly 100 miles.
    pub search_radius_km: f64,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_range_miles: f64, miles_per_gallon: f64, search_radius_km: f64) -> Self {
        Self {
            max_range_miles,
            miles_per_gallon,
            search_radius_km,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_range_miles: 500.0,
            miles_per_gallon: 10.0,
            search_radius_km: 160.0,
        }
    }
}
