//! Domain types for fuel-route planning.
//!
//! Everything here is a plain value type. Plan results are built fresh per
//! request and never refer back to the station store.

mod coordinate;
mod route;
mod station;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use route::{PlanResult, RouteGeometry, RouteSummary};
pub use station::{FuelStop, Station, StationId};
