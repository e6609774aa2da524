//! Defines the data structures representing SMHI weather stations as read from the
//! station listing, and the distance-annotated form produced by a nearest-station query.

use crate::types::geo_point::GeoPoint;
use serde::{Deserialize, Serialize};

/// A single SMHI weather station.
///
/// Stations are only ever created from catalog rows whose coordinates parsed cleanly,
/// so `location` always holds finite, in-range degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The SMHI station number (e.g. "98230" for Stockholm-Observatoriekullen).
    pub id: String,
    /// Human readable station name as listed by SMHI.
    pub name: String,
    /// Where the station is located.
    pub location: GeoPoint,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }
}

/// A [`Station`] together with its great-circle distance to a query point.
///
/// Produced by [`nearest`](crate::nearest); ordering within a result set is ascending
/// by `distance_km`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    pub station: Station,
    /// Distance from the query point in kilometers, never negative.
    pub distance_km: f64,
}
