//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FuelStop, PlanResult, RouteSummary, Station};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Free-text start address
    pub start: String,

    /// Free-text end address
    pub end: String,
}

/// The driving route in a plan response.
#[derive(Debug, Serialize)]
pub struct RouteDto {
    /// Total driving distance in meters
    pub distance_meters: f64,

    /// Route polyline as `[longitude, latitude]` pairs, GeoJSON order
    pub geometry: Vec<[f64; 2]>,
}

impl RouteDto {
    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            distance_meters: summary.distance_meters,
            geometry: summary
                .geometry
                .points()
                .iter()
                .map(|p| [p.longitude(), p.latitude()])
                .collect(),
        }
    }
}

/// A selected fuel stop in a plan response.
#[derive(Debug, Serialize)]
pub struct StopDto {
    pub id: u64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl StopDto {
    pub fn from_stop(stop: &FuelStop) -> Self {
        Self {
            id: stop.station_id.0,
            name: stop.name.clone(),
            city: stop.city.clone(),
            state: stop.state.clone(),
            price: stop.price,
            latitude: stop.location.latitude(),
            longitude: stop.location.longitude(),
        }
    }
}

/// Response for a successful plan.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub route: RouteDto,
    pub stops: Vec<StopDto>,
    pub estimated_total_cost: f64,
    pub gallons_needed: f64,
}

impl PlanRouteResponse {
    pub fn from_result(result: &PlanResult) -> Self {
        Self {
            route: RouteDto::from_summary(&result.route),
            stops: result.stops.iter().map(StopDto::from_stop).collect(),
            estimated_total_cost: result.estimated_total_cost,
            gallons_needed: result.gallons_needed,
        }
    }
}

/// A station in the listing endpoint.
#[derive(Debug, Serialize)]
pub struct StationDto {
    pub id: u64,
    pub opis_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub rack_id: Option<String>,
    pub price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationDto {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            opis_id: station.opis_id.clone(),
            name: station.name.clone(),
            address: station.address.clone(),
            city: station.city.clone(),
            state: station.state.clone(),
            rack_id: station.rack_id.clone(),
            price: station.price,
            latitude: station.location.map(|l| l.latitude()),
            longitude: station.location.map(|l| l.longitude()),
        }
    }
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// Structured error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short human-readable description of what went wrong
    pub detail: String,

    /// Summarized underlying error, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, RouteGeometry};

    #[test]
    fn route_dto_uses_geojson_order() {
        let summary = RouteSummary {
            distance_meters: 1000.0,
            geometry: RouteGeometry::new(vec![Coordinate::new(36.17, -115.14).unwrap()]),
        };

        let dto = RouteDto::from_summary(&summary);
        assert_eq!(dto.geometry, vec![[-115.14, 36.17]]);
    }

    #[test]
    fn error_response_omits_absent_error() {
        let body = serde_json::to_string(&ErrorResponse {
            detail: "zero-distance route".to_string(),
            error: None,
        })
        .unwrap();

        assert_eq!(body, r#"{"detail":"zero-distance route"}"#);
    }
}
