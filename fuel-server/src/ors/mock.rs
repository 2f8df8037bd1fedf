//! Mock ORS provider for testing without API access.
//!
//! Serves geocoding answers from a fixed address table and synthesizes
//! straight-line routes, so the planner can be exercised end to end
//! without credentials or network access.

use std::collections::HashMap;

use crate::domain::{Coordinate, RouteGeometry, RouteSummary};
use crate::geo::haversine_distance_km;
use crate::planner::{DirectionsProvider, Geocoder, PlanError};

/// Number of points in a synthesized route polyline.
const ROUTE_POINTS: usize = 25;

/// Mock geocoder and directions provider.
///
/// Addresses are matched on their trimmed text. Routes are straight lines
/// between the endpoints with the haversine distance as the "driving"
/// distance; crude, but deterministic.
#[derive(Debug, Clone, Default)]
pub struct MockOrs {
    addresses: HashMap<String, Coordinate>,
}

impl MockOrs {
    /// Create an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an address and the coordinate it resolves to.
    pub fn with_address(mut self, address: impl Into<String>, location: Coordinate) -> Self {
        self.addresses.insert(address.into(), location);
        self
    }
}

impl Geocoder for MockOrs {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, PlanError> {
        Ok(self.addresses.get(address.trim()).copied())
    }
}

impl DirectionsProvider for MockOrs {
    async fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<RouteSummary>, PlanError> {
        let mut points = Vec::with_capacity(ROUTE_POINTS);
        for i in 0..ROUTE_POINTS {
            let t = i as f64 / (ROUTE_POINTS - 1) as f64;
            let lat = from.latitude() + t * (to.latitude() - from.latitude());
            let lon = from.longitude() + t * (to.longitude() - from.longitude());
            let point = Coordinate::new(lat, lon).map_err(|e| PlanError::Directions {
                message: e.to_string(),
            })?;
            points.push(point);
        }

        Ok(Some(RouteSummary {
            distance_meters: haversine_distance_km(from, to) * 1000.0,
            geometry: RouteGeometry::new(points),
        }))
    }
}
