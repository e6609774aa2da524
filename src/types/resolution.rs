use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// The temperature resolved for a point and time, plus where and when it was measured.
///
/// Serializes to the flat record
/// `{temperature, requested_time, measured_time, station, name, distance_km}` with both
/// times rendered as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherResolution {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// The time the caller asked for.
    #[serde(serialize_with = "serialize_timestamp")]
    pub requested_time: NaiveDateTime,
    /// The timestamp of the sample that was picked, closest to `requested_time`.
    #[serde(serialize_with = "serialize_timestamp")]
    pub measured_time: NaiveDateTime,
    #[serde(rename = "station")]
    pub station_id: String,
    #[serde(rename = "name")]
    pub station_name: String,
    /// Distance from the requested point to the station, rounded to two decimals.
    pub distance_km: f64,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(timestamp)
}
