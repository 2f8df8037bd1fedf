//! Route-and-fuel-stop planner.
//!
//! This module implements the core algorithm that answers: "driving from
//! this address to that one, where should I refuel and what will it cost?"
//!
//! The planner geocodes both endpoints, fetches a driving route, samples
//! leg-boundary points along the geometry, and picks the cheapest station
//! within range of each sample.

mod config;
mod plan;


pub use config::PlanConfig;
pub use plan::{
    DirectionsProvider, Geocoder, PlanError, PlanRequest, Planner, StationSource,
};
