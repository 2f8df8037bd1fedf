//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{FuelStop, PlanResult};

/// Meters per statute mile, for display only.
const METERS_PER_MILE: f64 = 1609.344;

// ============================================================================
// Page Templates
// ============================================================================

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Plan results fragment.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub distance_miles: String,
    pub gallons_needed: String,
    pub estimated_total_cost: String,
    pub stops: Vec<StopView>,
}

impl PlanResultsTemplate {
    /// Build the fragment view from a plan result.
    pub fn from_result(result: &PlanResult) -> Self {
        Self {
            distance_miles: format!("{:.0}", result.route.distance_meters / METERS_PER_MILE),
            gallons_needed: format!("{:.2}", result.gallons_needed),
            estimated_total_cost: format!("{:.2}", result.estimated_total_cost),
            stops: result.stops.iter().map(StopView::from_stop).collect(),
        }
    }
}

// ============================================================================
// View Models
// ============================================================================

/// Fuel stop view model for templates.
#[derive(Debug, Clone)]
pub struct StopView {
    pub name: String,
    pub place: String,
    pub price: String,
}

impl StopView {
    /// Create from a domain fuel stop.
    pub fn from_stop(stop: &FuelStop) -> Self {
        let place = match (stop.city.as_deref(), stop.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => String::new(),
        };

        Self {
            name: stop.name.clone(),
            place,
            price: format!("{:.2}", stop.price),
        }
    }
}
