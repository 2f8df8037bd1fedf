//! ORS API response DTOs.
//!
//! These types map directly to the GeoJSON payloads returned by the
//! geocoding and directions endpoints. Only the fields the planner needs
//! are modelled; everything else is ignored by serde.

use serde::Deserialize;

/// Response from `geocode/search`.
///
/// An empty `features` array means "no result" and is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: PointGeometry,
}

/// GeoJSON point: `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

/// Response from `v2/directions/driving-car/geojson`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    pub properties: RouteProperties,
    pub geometry: LineGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    pub summary: RouteSummaryDto,
}

/// Distance/duration summary for a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSummaryDto {
    /// Total distance in meters.
    #[serde(default)]
    pub distance: f64,

    /// Total duration in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// GeoJSON line string: each entry is `[longitude, latitude]`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineGeometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}
