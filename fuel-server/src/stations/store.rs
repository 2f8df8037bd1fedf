//! In-memory station store.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::{Station, StationId};
use crate::planner::{Geocoder, StationSource};

use super::error::StationError;
use super::import::load_stations;

/// Thread-safe station store, loaded from a price sheet CSV.
///
/// Cheap to clone; all clones share the same data. Reads take snapshots,
/// so many planning calls can run concurrently against one store.
#[derive(Clone)]
pub struct StationStore {
    inner: Arc<RwLock<Vec<Station>>>,
    csv_path: PathBuf,
}

impl StationStore {
    /// Load a store from the given CSV path.
    pub fn load(csv_path: impl Into<PathBuf>) -> Result<Self, StationError> {
        let csv_path = csv_path.into();
        let stations = load_stations(&csv_path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(stations)),
            csv_path,
        })
    }

    /// Snapshot of every imported station, in file order.
    pub async fn all(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Snapshot of stations with a known location, in file order.
    ///
    /// File order is the stable order the planner relies on for price
    /// tie-breaks.
    pub async fn geocoded(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard
            .iter()
            .filter(|s| s.location.is_some())
            .cloned()
            .collect()
    }

    /// Number of stations in the store.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-read the CSV and replace the store contents.
    ///
    /// On failure the existing data is preserved and the error returned.
    pub async fn reload(&self) -> Result<usize, StationError> {
        let stations = load_stations(&self.csv_path)?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = stations;

        Ok(count)
    }

    /// Try to geocode stations the price sheet left unlocated.
    ///
    /// One attempt per station, built from "name, city, state". Failures
    /// are logged and skipped; there are no retries and no fallback
    /// providers. Returns the number of stations that gained a location.
    pub async fn geocode_missing<G: Geocoder>(&self, geocoder: &G) -> usize {
        let unlocated: Vec<(StationId, String)> = {
            let guard = self.inner.read().await;
            guard
                .iter()
                .filter(|s| s.location.is_none())
                .map(|s| (s.id, geocode_query(s)))
                .collect()
        };

        let mut located = Vec::new();
        for (id, query) in unlocated {
            match geocoder.geocode(&query).await {
                Ok(Some(location)) => located.push((id, location)),
                Ok(None) => warn!(%id, %query, "no geocode result for station"),
                Err(e) => warn!(%id, %query, error = %e, "geocoding failed for station"),
            }
        }

        let count = located.len();
        if count > 0 {
            let mut guard = self.inner.write().await;
            for station in guard.iter_mut() {
                if let Some((_, location)) = located.iter().find(|(id, _)| *id == station.id) {
                    station.location = Some(*location);
                }
            }
        }

        count
    }
}

/// Free-text geocoding query for a station.
fn geocode_query(station: &Station) -> String {
    let mut parts = vec![station.name.as_str()];
    if let Some(city) = station.city.as_deref() {
        parts.push(city);
    }
    if let Some(state) = station.state.as_deref() {
        parts.push(state);
    }
    parts.join(", ")
}

impl StationSource for StationStore {
    async fn geocoded_stations(&self) -> Vec<Station> {
        self.geocoded().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::planner::PlanError;
    use std::io::Write;

    const HEADER: &str = "OPIS Truckstop ID,Truckstop Name,Address,City,State,Rack ID,Retail Price,Latitude,Longitude\n";

    fn write_sheet(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn sample_sheet() -> tempfile::NamedTempFile {
        write_sheet(&format!(
            "{HEADER}\
             101,Flying J,,Barstow,CA,,3.45,34.9,-117.0\n\
             102,Pilot,,Primm,NV,,3.25,,\n\
             103,Loves,,Baker,CA,,3.35,35.3,-116.1\n"
        ))
    }

    #[tokio::test]
    async fn geocoded_keeps_file_order_and_drops_unlocated() {
        let store = StationStore::load(sample_sheet().path()).unwrap();

        assert_eq!(store.len().await, 3);

        let geocoded = store.geocoded().await;
        assert_eq!(geocoded.len(), 2);
        assert_eq!(geocoded[0].name, "Flying J");
        assert_eq!(geocoded[1].name, "Loves");
    }

    #[tokio::test]
    async fn reload_failure_preserves_data() {
        let sheet = sample_sheet();
        let store = StationStore::load(sheet.path()).unwrap();
        assert_eq!(store.len().await, 3);

        drop(sheet); // the temp file is gone now

        assert!(store.reload().await.is_err());
        assert_eq!(store.len().await, 3, "old data survives a failed reload");
    }

    /// Geocoder that answers every query with a fixed point.
    struct EveryQuery(Coordinate);

    impl Geocoder for EveryQuery {
        async fn geocode(&self, _address: &str) -> Result<Option<Coordinate>, PlanError> {
            Ok(Some(self.0))
        }
    }

    /// Geocoder that always fails.
    struct NeverWorks;

    impl Geocoder for NeverWorks {
        async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, PlanError> {
            Err(PlanError::Geocode {
                address: address.to_string(),
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn geocode_missing_fills_unlocated_stations() {
        let store = StationStore::load(sample_sheet().path()).unwrap();
        let point = Coordinate::new(35.6, -115.4).unwrap();

        let saved = store.geocode_missing(&EveryQuery(point)).await;

        assert_eq!(saved, 1);
        assert_eq!(store.geocoded().await.len(), 3);

        let all = store.all().await;
        assert_eq!(all[1].name, "Pilot");
        assert_eq!(all[1].location, Some(point));
        // Already-located stations are untouched
        assert_eq!(
            all[0].location,
            Some(Coordinate::new(34.9, -117.0).unwrap())
        );
    }

    #[tokio::test]
    async fn geocode_missing_skips_failures() {
        let store = StationStore::load(sample_sheet().path()).unwrap();

        let saved = store.geocode_missing(&NeverWorks).await;

        assert_eq!(saved, 0);
        assert_eq!(store.geocoded().await.len(), 2);
    }
}
