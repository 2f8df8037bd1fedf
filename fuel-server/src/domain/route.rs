//! Route geometry and planning result types.

use super::coordinate::Coordinate;
use super::station::FuelStop;

/// An ordered polyline from start to end, in travel order.
///
/// Produced by the directions provider and consumed read-only. A usable
/// route has at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry(Vec<Coordinate>);

impl RouteGeometry {
    /// Wrap an ordered list of points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    /// Number of points in the polyline.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the polyline has no points at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The points in travel order.
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// The point a given fraction of the way along the route, by index
    /// interpolation: `index = floor(frac * (len - 1))`, clamped to the
    /// valid range.
    ///
    /// This samples the polyline at uniform *index* spacing, not uniform
    /// distance. Where provider geometry is denser (e.g. through cities)
    /// samples cluster there too. Deliberately kept this way: it is cheap,
    /// deterministic, and what downstream consumers expect.
    pub fn point_at_fraction(&self, frac: f64) -> Option<Coordinate> {
        let last = self.0.len().checked_sub(1)?;
        let index = ((frac * last as f64).floor() as usize).min(last);
        Some(self.0[index])
    }
}

/// A route as returned by the directions provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Total driving distance in meters.
    pub distance_meters: f64,

    /// The route polyline.
    pub geometry: RouteGeometry,
}

/// The outcome of one planning request.
///
/// Stops are in route order. The same station may appear for consecutive
/// samples when it is the cheapest candidate for both.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// The driving route the stops were sampled from.
    pub route: RouteSummary,

    /// Selected refueling stops, in route order.
    pub stops: Vec<FuelStop>,

    /// Estimated fuel cost for the whole trip, rounded to cents.
    /// Zero when no stops were found.
    pub estimated_total_cost: f64,

    /// Fuel needed for the whole trip, rounded to two decimals.
    pub gallons_needed: f64,
}
