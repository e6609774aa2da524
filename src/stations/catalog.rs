//! Parsing of the SMHI station listing into validated [`Station`] records.
//!
//! The listing is a semicolon-separated table exported from the SMHI metobs archive.
//! Its first row is metadata and never holds a station. The columns used are fixed by
//! position: id at 0, name at 1, latitude at 4 and longitude at 5. Coordinates are
//! written with a decimal comma, and the archive is known to leak header words and
//! placeholder tokens into the coordinate columns; such rows are dropped.

use crate::stations::error::{CatalogError, LocateStationError};
use crate::stations::locate_station::nearest;
use crate::types::geo_point::GeoPoint;
use crate::types::station::{RankedStation, Station};
use crate::utils::{parse_decimal, ParseError};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::path::Path;

const ID_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;
const LATITUDE_COLUMN: usize = 4;
const LONGITUDE_COLUMN: usize = 5;

/// The set of stations available for nearest-station lookups.
///
/// Stations keep the order of the listing they were parsed from, which is also the
/// order used to break distance ties in [`StationCatalog::nearest`].
///
/// # Examples
///
/// ```
/// use smhi_weather::StationCatalog;
///
/// let listing = "\
/// Id;Namn;Höjd;Aktiv;Latitud;Longitud
/// 98230;Stockholm-Observatoriekullen A;43,133;Ja;59,3417;18,0549
/// 71420;Göteborg A;3,0;Ja;57,7156;11,9924
/// 99999;Trasig station;0;Nej;undefined;NaN
/// ";
///
/// let catalog = StationCatalog::parse(listing);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("71420").map(|s| s.name.as_str()), Some("Göteborg A"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Parses the raw semicolon-separated listing.
    ///
    /// The first non-empty line is discarded. Lines that cannot be tokenized, or whose
    /// coordinates do not resolve to numbers, are skipped without failing the parse.
    pub fn parse(raw: &str) -> Self {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(raw.as_bytes());

        let records: Vec<StringRecord> = reader
            .records()
            .filter_map(|record| match record {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("Skipping station listing line that failed to tokenize: {}", e);
                    None
                }
            })
            .collect();

        Self::from_rows(records.iter())
    }

    /// Builds a catalog from rows that have already been split into fields.
    ///
    /// The same rules as [`StationCatalog::parse`] apply, including dropping the first row.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stations = Vec::new();
        let mut dropped = 0usize;

        for (line, row) in rows.into_iter().enumerate().skip(1) {
            let fields: Vec<S> = row.into_iter().collect();
            match station_from_row(&fields) {
                Ok(station) => stations.push(station),
                Err(e) => {
                    dropped += 1;
                    debug!("Dropping station listing row {}: {}", line, e);
                }
            }
        }

        info!(
            "Parsed {} stations from station listing, dropped {} rows",
            stations.len(),
            dropped
        );
        Self { stations }
    }

    /// Reads and parses a station listing stored as a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read or is not valid UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Read(path.to_path_buf(), e))?;
        Ok(Self::parse(&raw))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Looks up a station by its SMHI id.
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == id)
    }

    /// The `n` stations closest to `query`, nearest first. See [`nearest`].
    pub fn nearest(
        &self,
        query: GeoPoint,
        n: usize,
    ) -> Result<Vec<RankedStation>, LocateStationError> {
        nearest(query, self, n)
    }
}

impl FromIterator<Station> for StationCatalog {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StationCatalog {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

fn station_from_row<S: AsRef<str>>(fields: &[S]) -> Result<Station, ParseError> {
    // Missing columns read as "" and are rejected like any other empty value.
    let latitude = parse_decimal(field(fields, LATITUDE_COLUMN))?;
    let longitude = parse_decimal(field(fields, LONGITUDE_COLUMN))?;

    let location = GeoPoint::new(latitude, longitude);
    if !location.is_valid() {
        return Err(ParseError::OutOfRange(format!("({latitude}, {longitude})")));
    }

    Ok(Station::new(
        field(fields, ID_COLUMN).trim(),
        field(fields, NAME_COLUMN).trim(),
        location,
    ))
}

fn field<S: AsRef<str>>(fields: &[S], index: usize) -> &str {
    fields.get(index).map_or("", |value| value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const LISTING: &str = "\
Id;Namn;Höjd;Aktiv;Latitud;Longitud
98230;Stockholm-Observatoriekullen A;43,133;Ja;59,3417;18,0549
71420;Göteborg A;3,0;Ja;57,7156;11,9924
180940;Kiruna Flygplats;452,0;Ja;67,8167;20,3333
";

    #[test]
    fn parses_comma_decimal_coordinates() {
        let catalog = StationCatalog::parse("header\n1;Ett;x;y;59,33;18,07\n");
        assert_eq!(catalog.len(), 1);
        let station = &catalog.stations()[0];
        assert_eq!(station.id, "1");
        assert_eq!(station.name, "Ett");
        assert_relative_eq!(station.location.latitude, 59.33);
        assert_relative_eq!(station.location.longitude, 18.07);
    }

    #[test]
    fn first_row_is_always_discarded() {
        // Even a well-formed station in the first row is treated as metadata.
        let catalog = StationCatalog::parse("1;Ett;x;y;59,33;18,07\n2;Två;x;y;58,0;17,0\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].id, "2");
    }

    #[test]
    fn keeps_listing_order() {
        let catalog = StationCatalog::parse(LISTING);
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["98230", "71420", "180940"]);
    }

    #[test]
    fn header_leakage_and_empty_coordinates_drop_the_row() {
        let raw = "\
meta
1;Header leak;x;y;Latitud;Longitud
2;Empty;x;y;;
3;Placeholder;x;y;undefined;NaN
4;Half valid;x;y;59,0;
5;Short row;x
6;Garbage;x;y;abc;18,0
7;Valid;x;y;60,5;15,25
";
        let catalog = StationCatalog::parse(raw);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].id, "7");
    }

    #[test]
    fn out_of_range_coordinates_drop_the_row() {
        let catalog = StationCatalog::parse("meta\n1;Nowhere;x;y;95,0;18,0\n2;Ok;x;y;59,0;18,0\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].id, "2");
    }

    #[test]
    fn blank_lines_and_whitespace_are_tolerated() {
        let raw = "meta\n\n 10 ; Padded ;x;y; 59,5 ; 18,5 \n\n";
        let catalog = StationCatalog::parse(raw);
        assert_eq!(catalog.len(), 1);
        let station = &catalog.stations()[0];
        assert_eq!(station.id, "10");
        assert_eq!(station.name, "Padded");
        assert_relative_eq!(station.location.latitude, 59.5);
    }

    #[test]
    fn stray_quote_stays_inside_its_row() {
        let raw = "\
meta
1;\"Odd name;x;y;59,0;18,0
2;Ok;x;y;58,0;17,0
3;Ok3;x;y;57,0;16,0
";
        let catalog = StationCatalog::parse(raw);
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(catalog.stations()[0].name, "\"Odd name");
    }

    #[test]
    fn from_rows_matches_parse() {
        let rows = vec![
            vec!["Id", "Namn", "Höjd", "Aktiv", "Latitud", "Longitud"],
            vec!["98230", "Stockholm", "43", "Ja", "59,3417", "18,0549"],
            vec!["1", "Broken", "0", "Nej", "Latitud", ""],
        ];
        let catalog = StationCatalog::from_rows(rows);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("98230").map(|s| s.name.as_str()), Some("Stockholm"));
        assert!(catalog.get("1").is_none());
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        assert!(StationCatalog::parse("").is_empty());
        assert!(StationCatalog::parse("only a header\n").is_empty());
    }

    #[test]
    fn from_path_reads_utf8_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LISTING.as_bytes()).unwrap();
        file.flush().unwrap();

        let catalog = StationCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog, StationCatalog::parse(LISTING));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("stations.csv");
        match StationCatalog::from_path(&missing) {
            Err(CatalogError::Read(path, _)) => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
