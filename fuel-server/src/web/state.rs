//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedOrsClient;
use crate::planner::PlanConfig;
use crate::stations::StationStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached ORS client (geocoding and directions)
    pub ors: Arc<CachedOrsClient>,

    /// Imported station data
    pub stations: StationStore,

    /// Planner configuration
    pub config: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ors: Arc<CachedOrsClient>, stations: StationStore, config: PlanConfig) -> Self {
        Self {
            ors,
            stations,
            config: Arc::new(config),
        }
    }
}
