//! CSV loader for the OPIS truckstop price sheet.
//!
//! The sheet carries one row per truckstop with a retail diesel price.
//! Some exports already include coordinates; rows without them are left
//! unlocated and can be filled in later by the startup geocoding pass.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Coordinate, Station, StationId};

use super::error::StationError;

/// One row of the price sheet, as exported by OPIS.
#[derive(Debug, Deserialize)]
struct PriceSheetRow {
    #[serde(rename = "OPIS Truckstop ID")]
    opis_id: Option<String>,

    #[serde(rename = "Truckstop Name")]
    name: String,

    #[serde(rename = "Address")]
    address: Option<String>,

    #[serde(rename = "City")]
    city: Option<String>,

    #[serde(rename = "State")]
    state: Option<String>,

    #[serde(rename = "Rack ID")]
    rack_id: Option<String>,

    #[serde(rename = "Retail Price")]
    price: String,

    #[serde(rename = "Latitude", default)]
    latitude: Option<f64>,

    #[serde(rename = "Longitude", default)]
    longitude: Option<f64>,
}

/// Collapse runs of whitespace, as the source sheet mixes tabs and
/// newlines into address fields.
fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn clean_opt(s: Option<String>) -> Option<String> {
    s.map(|v| clean(&v)).filter(|v| !v.is_empty())
}

/// Load stations from a price sheet CSV.
///
/// Rows without a parseable positive price are skipped. Ids are assigned
/// in file order, which is also the stable order used for price
/// tie-breaks during planning.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, StationError> {
    let path = path.as_ref();

    let file = std::fs::File::open(path).map_err(|source| StationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut stations = Vec::new();

    for record in reader.deserialize() {
        let row: PriceSheetRow = record?;

        let Ok(price) = row.price.trim().parse::<f64>() else {
            debug!(name = %row.name, price = %row.price, "skipping row with bad price");
            continue;
        };
        if price <= 0.0 {
            debug!(name = %row.name, price, "skipping row with non-positive price");
            continue;
        }

        let location = match (row.latitude, row.longitude) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon).ok(),
            _ => None,
        };

        stations.push(Station {
            id: StationId(stations.len() as u64 + 1),
            opis_id: clean_opt(row.opis_id),
            name: clean(&row.name),
            address: clean_opt(row.address),
            city: clean_opt(row.city),
            state: clean_opt(row.state),
            rack_id: clean_opt(row.rack_id),
            price,
            location,
        });
    }

    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sheet(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const HEADER: &str = "OPIS Truckstop ID,Truckstop Name,Address,City,State,Rack ID,Retail Price,Latitude,Longitude\n";

    #[test]
    fn loads_rows_in_file_order() {
        let sheet = write_sheet(&format!(
            "{HEADER}\
             101,Flying J,100 Main St,Barstow,CA,R1,3.45,34.9,-117.0\n\
             102,Pilot,200 Elm St,Primm,NV,R2,3.25,35.6,-115.4\n"
        ));

        let stations = load_stations(sheet.path()).unwrap();

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, StationId(1));
        assert_eq!(stations[0].name, "Flying J");
        assert_eq!(stations[0].price, 3.45);
        assert!(stations[0].location.is_some());
        assert_eq!(stations[1].id, StationId(2));
        assert_eq!(stations[1].name, "Pilot");
    }

    #[test]
    fn skips_rows_with_bad_prices() {
        let sheet = write_sheet(&format!(
            "{HEADER}\
             101,Good,,,,,3.45,,\n\
             102,Not A Price,,,,,n/a,,\n\
             103,Negative,,,,,-1.0,,\n\
             104,Also Good,,,,,3.99,,\n"
        ));

        let stations = load_stations(sheet.path()).unwrap();

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Good");
        assert_eq!(stations[1].name, "Also Good");
        // Ids stay contiguous even when rows are skipped
        assert_eq!(stations[1].id, StationId(2));
    }

    #[test]
    fn rows_without_coordinates_are_unlocated() {
        let sheet = write_sheet(&format!(
            "{HEADER}\
             101,Located,,,,,3.45,34.9,-117.0\n\
             102,Unlocated,,,,,3.25,,\n"
        ));

        let stations = load_stations(sheet.path()).unwrap();

        assert!(stations[0].location.is_some());
        assert!(stations[1].location.is_none());
    }

    #[test]
    fn collapses_whitespace_in_text_fields() {
        let sheet = write_sheet(&format!(
            "{HEADER}\
             101,\"Flying   J\",\"100  Main\nSt\",Barstow,CA,,3.45,,\n"
        ));

        let stations = load_stations(sheet.path()).unwrap();

        assert_eq!(stations[0].name, "Flying J");
        assert_eq!(stations[0].address.as_deref(), Some("100 Main St"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_stations("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, StationError::Io { .. }));
    }
}
