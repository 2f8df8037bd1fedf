//! Caching layer for ORS responses.
//!
//! Geocoding results for a given address are stable, and route geometry
//! for a given endpoint pair changes rarely, so both are cached with a
//! TTL. Route cache keys quantize coordinates to a microdegree lattice
//! to bound cache cardinality.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, RouteSummary};
use crate::ors::{OrsClient, OrsError};
use crate::planner::{DirectionsProvider, Geocoder, PlanError};

/// Route cache key: both endpoints quantized to microdegrees.
type RouteKey = ((i64, i64), (i64, i64));

/// Cached route entry. `None` records a "no route" answer.
type RouteEntry = Option<Arc<RouteSummary>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Quantize a coordinate to microdegrees for use as a cache key.
fn quantize(c: Coordinate) -> (i64, i64) {
    (
        (c.latitude() * 1e6).round() as i64,
        (c.longitude() * 1e6).round() as i64,
    )
}

/// ORS client with caching.
///
/// Wraps an [`OrsClient`] and caches geocode answers (including negative
/// ones) and route summaries.
pub struct CachedOrsClient {
    client: OrsClient,
    geocodes: MokaCache<String, Option<Coordinate>>,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl CachedOrsClient {
    /// Create a new cached client.
    pub fn new(client: OrsClient, config: &CacheConfig) -> Self {
        let geocodes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            geocodes,
            routes,
        }
    }

    /// Geocode an address, using the cache if possible.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, OrsError> {
        let key = address.trim().to_string();

        if let Some(cached) = self.geocodes.get(&key).await {
            return Ok(cached);
        }

        let result = self.client.geocode(address).await?;
        self.geocodes.insert(key, result).await;

        Ok(result)
    }

    /// Fetch a driving route, using the cache if possible.
    pub async fn directions(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<Arc<RouteSummary>>, OrsError> {
        let key = (quantize(from), quantize(to));

        if let Some(cached) = self.routes.get(&key).await {
            return Ok(cached);
        }

        let entry = self.client.directions(from, to).await?.map(Arc::new);
        self.routes.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &OrsClient {
        &self.client
    }

    /// Number of cached geocode entries (for monitoring).
    pub fn geocode_entry_count(&self) -> u64 {
        self.geocodes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.geocodes.invalidate_all();
        self.routes.invalidate_all();
    }
}

impl Geocoder for CachedOrsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, PlanError> {
        CachedOrsClient::geocode(self, address)
            .await
            .map_err(|e| PlanError::Geocode {
                address: address.to_string(),
                message: e.to_string(),
            })
    }
}

impl DirectionsProvider for CachedOrsClient {
    async fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<RouteSummary>, PlanError> {
        CachedOrsClient::directions(self, from, to)
            .await
            .map(|entry| entry.map(|summary| (*summary).clone()))
            .map_err(|e| PlanError::Directions {
                message: e.to_string(),
            })
    }
}
