//! OpenRouteService (ORS) client.
//!
//! This module provides an HTTP client for the two ORS endpoints the
//! planner needs:
//!
//! - `geocode/search` (Pelias) to resolve free-text addresses,
//! - `v2/directions/driving-car/geojson` for driving routes.
//!
//! ORS quirks worth knowing:
//! - coordinates are `[longitude, latitude]` pairs, GeoJSON order
//! - geocoding authenticates via an `api_key` query parameter, directions
//!   via an `Authorization` header
//! - "no result" is an empty `features` array, not an error status

mod client;
mod error;
mod mock;
mod types;

pub use client::{OrsClient, OrsConfig};
pub use error::OrsError;
pub use mock::MockOrs;
pub use types::{DirectionsResponse, GeocodeResponse};
