//! The planning algorithm.
//!
//! Steps run strictly sequentially: geocode -> directions -> sampling.
//! There are no retries here; collaborator failures surface as the
//! corresponding `PlanError` and the boundary layer translates them.

use std::future::Future;

use tracing::debug;

use crate::domain::{Coordinate, FuelStop, PlanResult, RouteSummary, Station};
use crate::geo::haversine_distance_km;

use super::config::PlanConfig;

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// Error from route planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Missing or malformed start/end address
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// An endpoint could not be resolved, or the geocoder failed
    #[error("could not geocode \"{address}\": {message}")]
    Geocode { address: String, message: String },

    /// No route found, or the directions provider failed
    #[error("directions lookup failed: {message}")]
    Directions { message: String },

    /// The provider returned a zero-distance route or no geometry
    #[error("route has zero distance or no geometry")]
    EmptyRoute,
}

/// Trait for resolving free-text addresses to coordinates.
///
/// `Ok(None)` means "no match"; `Err` is reserved for transport and
/// provider failures. This seam lets tests drive the planner with fixed
/// address tables.
pub trait Geocoder {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, PlanError>> + Send;
}

/// Trait for fetching a driving route between two coordinates.
///
/// `Ok(None)` means the provider found no drivable path.
pub trait DirectionsProvider {
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> impl Future<Output = Result<Option<RouteSummary>, PlanError>> + Send;
}

/// Trait for supplying geocoded stations.
///
/// Implementations must return only stations with a known location, in an
/// order that is stable within a single call: the planner breaks price
/// ties by first-listed position.
pub trait StationSource {
    fn geocoded_stations(&self) -> impl Future<Output = Vec<Station>> + Send;
}

/// Request for route planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Free-text start address.
    pub start_address: String,

    /// Free-text end address.
    pub end_address: String,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(start_address: impl Into<String>, end_address: impl Into<String>) -> Self {
        Self {
            start_address: start_address.into(),
            end_address: end_address.into(),
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.start_address.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "start address is empty".to_string(),
            ));
        }

        if self.end_address.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "end address is empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Route-and-fuel-stop planner.
///
/// Borrows its collaborators so a single set of clients can serve many
/// concurrent planning calls; each call works on a call-local station
/// snapshot and mutates nothing.
pub struct Planner<'a, G, D, S> {
    geocoder: &'a G,
    directions: &'a D,
    stations: &'a S,
    config: &'a PlanConfig,
}

impl<'a, G, D, S> Planner<'a, G, D, S>
where
    G: Geocoder,
    D: DirectionsProvider,
    S: StationSource,
{
    /// Create a new planner.
    pub fn new(geocoder: &'a G, directions: &'a D, stations: &'a S, config: &'a PlanConfig) -> Self {
        Self {
            geocoder,
            directions,
            stations,
            config,
        }
    }

    /// Plan a route with fuel stops.
    ///
    /// Fails without a partial result if either address cannot be
    /// geocoded, no route is found, or the route is degenerate.
    pub async fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        request.validate()?;

        let start = self.resolve(&request.start_address).await?;
        let end = self.resolve(&request.end_address).await?;

        let summary = self
            .directions
            .route(start, end)
            .await?
            .ok_or_else(|| PlanError::Directions {
                message: "no route found".to_string(),
            })?;

        let total_miles = summary.distance_meters / METERS_PER_MILE;
        if total_miles == 0.0 || summary.geometry.is_empty() {
            return Err(PlanError::EmptyRoute);
        }

        // One sample per fuel leg; the last fraction is 1.0, so the
        // destination itself is always sampled.
        let num_legs = (total_miles / self.config.max_range_miles).ceil() as usize;

        debug!(
            total_miles,
            num_legs,
            geometry_points = summary.geometry.len(),
            "sampling fuel stops"
        );

        // One snapshot per planning call, not per sample
        let stations = self.stations.geocoded_stations().await;

        let mut stops: Vec<FuelStop> = Vec::new();
        for i in 1..=num_legs {
            let frac = i as f64 / num_legs as f64;
            let Some(sample) = summary.geometry.point_at_fraction(frac) else {
                continue;
            };

            match cheapest_within(&stations, sample, self.config.search_radius_km) {
                Some(stop) => stops.push(stop),
                None => debug!(leg = i, %sample, "no station within search radius"),
            }
        }

        let gallons_needed = total_miles / self.config.miles_per_gallon;
        let estimated_total_cost = if stops.is_empty() {
            0.0
        } else {
            let average_price =
                stops.iter().map(|s| s.price).sum::<f64>() / stops.len() as f64;
            gallons_needed * average_price
        };

        Ok(PlanResult {
            route: summary,
            stops,
            estimated_total_cost: round_to_cents(estimated_total_cost),
            gallons_needed: round_to_cents(gallons_needed),
        })
    }

    async fn resolve(&self, address: &str) -> Result<Coordinate, PlanError> {
        self.geocoder
            .geocode(address)
            .await?
            .ok_or_else(|| PlanError::Geocode {
                address: address.to_string(),
                message: "no match found".to_string(),
            })
    }
}

/// The cheapest station within `radius_km` of `sample`, snapshotted.
///
/// Comparison is strict, so a price tie keeps the first-listed station.
fn cheapest_within(stations: &[Station], sample: Coordinate, radius_km: f64) -> Option<FuelStop> {
    let mut best: Option<&Station> = None;

    for station in stations {
        let Some(location) = station.location else {
            continue;
        };

        if haversine_distance_km(sample, location) > radius_km {
            continue;
        }

        if best.is_none_or(|b| station.price < b.price) {
            best = Some(station);
        }
    }

    best.and_then(FuelStop::snapshot)
}

/// Round to two decimal places for the externally visible result.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
