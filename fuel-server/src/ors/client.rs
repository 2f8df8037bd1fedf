//! ORS HTTP client.
//!
//! Provides async methods for geocoding addresses and fetching driving
//! routes. Responses are validated into typed structs at this boundary;
//! nothing downstream ever inspects raw JSON.

use reqwest::StatusCode;
use reqwest::header;

use crate::domain::{Coordinate, RouteGeometry, RouteSummary};

use super::error::OrsError;
use super::types::{DirectionsResponse, GeocodeResponse};

/// Default base URL for the OpenRouteService API.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default country filter for geocoding results.
const DEFAULT_COUNTRY_FILTER: &str = "US,CA";

/// Configuration for the ORS client.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production ORS)
    pub base_url: String,
    /// Comma-separated ISO country codes to restrict geocoding to
    pub country_filter: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OrsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country_filter: DEFAULT_COUNTRY_FILTER.to_string(),
            timeout_secs: 20,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the geocoding country filter.
    pub fn with_country_filter(mut self, countries: impl Into<String>) -> Self {
        self.country_filter = countries.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenRouteService API client.
///
/// The timeout configured on the underlying reqwest client bounds every
/// geocode and directions call, so a slow provider cannot hang a planning
/// request indefinitely.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    country_filter: String,
}

impl OrsClient {
    /// Create a new ORS client with the given configuration.
    pub fn new(config: OrsConfig) -> Result<Self, OrsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            country_filter: config.country_filter,
        })
    }

    /// Resolve a free-text address to its best-match coordinate.
    ///
    /// Returns `Ok(None)` when the geocoder has no match for the text.
    /// Only transport and provider failures produce an `Err`.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, OrsError> {
        let url = format!("{}/geocode/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("text", address),
                ("size", "1"),
                ("boundary.country", self.country_filter.as_str()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| OrsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let Some(feature) = parsed.features.into_iter().next() else {
            return Ok(None);
        };

        let [lon, lat] = feature.geometry.coordinates;
        Ok(Some(Coordinate::new(lat, lon)?))
    }

    /// Fetch a driving route between two coordinates.
    ///
    /// Returns `Ok(None)` when ORS cannot find a drivable path.
    pub async fn directions(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<RouteSummary>, OrsError> {
        let url = format!("{}/v2/directions/driving-car/geojson", self.base_url);

        // ORS wants [longitude, latitude] pairs
        let payload = serde_json::json!({
            "coordinates": [
                [from.longitude(), from.latitude()],
                [to.longitude(), to.latitude()],
            ]
        });

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, self.api_key.as_str())
            .json(&payload)
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| OrsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let Some(feature) = parsed.features.into_iter().next() else {
            return Ok(None);
        };

        let points = feature
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coordinate::new(lat, lon))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RouteSummary {
            distance_meters: feature.properties.summary.distance,
            geometry: RouteGeometry::new(points),
        }))
    }
}

/// Map error statuses to `OrsError` and return the body text on success.
async fn check_status(response: reqwest::Response) -> Result<String, OrsError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(OrsError::Unauthorized);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(OrsError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(OrsError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}
