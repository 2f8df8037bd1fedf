//! Station types.

use std::fmt;

use super::coordinate::Coordinate;

/// Identifier assigned to a station when the price sheet is imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fuel station as imported from the OPIS price sheet.
///
/// The planner only ever reads snapshots of these; stations without a
/// `location` are never planning candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,

    /// OPIS truckstop identifier from the source sheet, when present.
    pub opis_id: Option<String>,

    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    /// Rack identifier from the source sheet, when present.
    pub rack_id: Option<String>,

    /// Retail diesel price in dollars per gallon.
    pub price: f64,

    /// Geocoded position. Absent until the station has been geocoded.
    pub location: Option<Coordinate>,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) - {}",
            self.name,
            self.city.as_deref().unwrap_or("?"),
            self.state.as_deref().unwrap_or("?"),
            self.price
        )
    }
}

/// A snapshot of a selected station at planning time.
///
/// Carries no back-reference to the store and no lifecycle beyond the
/// response it appears in.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    pub station_id: StationId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub price: f64,
    pub location: Coordinate,
}

impl FuelStop {
    /// Snapshot a station for a plan response.
    ///
    /// Returns `None` for stations without a location.
    pub fn snapshot(station: &Station) -> Option<Self> {
        let location = station.location?;
        Some(Self {
            station_id: station.id,
            name: station.name.clone(),
            city: station.city.clone(),
            state: station.state.clone(),
            price: station.price,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(location: Option<Coordinate>) -> Station {
        Station {
            id: StationId(7),
            opis_id: Some("123".to_string()),
            name: "Flying J".to_string(),
            address: None,
            city: Some("Barstow".to_string()),
            state: Some("CA".to_string()),
            rack_id: None,
            price: 3.45,
            location,
        }
    }

    #[test]
    fn snapshot_requires_location() {
        assert!(FuelStop::snapshot(&station(None)).is_none());

        let located = station(Some(Coordinate::new(34.9, -117.0).unwrap()));
        let stop = FuelStop::snapshot(&located).unwrap();
        assert_eq!(stop.station_id, StationId(7));
        assert_eq!(stop.name, "Flying J");
        assert_eq!(stop.price, 3.45);
    }

    #[test]
    fn display_includes_place_and_price() {
        let s = station(None);
        assert_eq!(s.to_string(), "Flying J (Barstow, CA) - 3.45");
    }
}
