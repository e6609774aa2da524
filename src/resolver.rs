//! This module provides the main entry point of the crate: resolving the air temperature
//! at a geographical point and time from the nearest SMHI station.

use crate::config::ArchiveConfig;
use crate::error::SmhiError;
use crate::stations::catalog::StationCatalog;
use crate::stations::error::LocateStationError;
use crate::stations::locate_station::nearest;
use crate::types::geo_point::GeoPoint;
use crate::types::resolution::WeatherResolution;
use crate::types::temperature::TemperatureSeries;
use crate::weather_data::extractor::nearest_sample;
use crate::weather_data::fetcher::ArchiveFetcher;
use crate::weather_data::http::{BlockingHttpClient, HttpClient};
use bon::bon;
use chrono::NaiveDateTime;
use log::info;
use std::time::Duration;

/// Resolves temperatures for arbitrary points using the nearest station in a catalog.
///
/// The resolver holds no state besides its HTTP client and archive settings: nothing is
/// cached between calls, and each [`resolve`](WeatherResolver::resolve) makes exactly two
/// requests to the archive.
///
/// # Examples
///
/// ```no_run
/// use smhi_weather::{parse_timestamp, GeoPoint, SmhiError, StationCatalog, WeatherResolver};
/// use std::time::Duration;
///
/// # fn main() -> Result<(), SmhiError> {
/// let catalog = StationCatalog::from_path("stations.csv")?;
/// let resolver = WeatherResolver::builder()
///     .timeout(Duration::from_secs(60))
///     .build()?;
///
/// let when = parse_timestamp("2023-01-15 12:00:00").expect("valid timestamp");
/// let resolution = resolver.resolve(GeoPoint::new(59.3293, 18.0686), when, &catalog)?;
/// println!(
///     "{} °C at {} ({} km away)",
///     resolution.temperature, resolution.station_name, resolution.distance_km
/// );
/// # Ok(())
/// # }
/// ```
pub struct WeatherResolver<C = BlockingHttpClient> {
    fetcher: ArchiveFetcher<C>,
}

#[bon]
impl WeatherResolver<BlockingHttpClient> {
    /// Creates a resolver talking to the SMHI archive over a blocking `reqwest` client.
    ///
    /// # Arguments
    ///
    /// * `.timeout(Duration)`: Optional. Per-request timeout of the HTTP client.
    /// * `.config(ArchiveConfig)`: Optional. Archive location. Defaults to
    ///   [`ArchiveConfig::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`SmhiError::Http`] if the HTTP client cannot be built.
    #[builder]
    pub fn new(
        timeout: Option<Duration>,
        config: Option<ArchiveConfig>,
    ) -> Result<Self, SmhiError> {
        let client = BlockingHttpClient::builder()
            .maybe_timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, config.unwrap_or_default()))
    }
}

impl<C: HttpClient> WeatherResolver<C> {
    /// Creates a resolver on top of any [`HttpClient`].
    pub fn with_client(client: C, config: ArchiveConfig) -> Self {
        Self {
            fetcher: ArchiveFetcher::new(client, config),
        }
    }

    /// Resolves the temperature at `point` closest in time to `target_time`.
    ///
    /// Picks the nearest station in `catalog`, downloads its series and selects the
    /// sample nearest to `target_time`. `distance_km` in the result is rounded to two
    /// decimals; both timestamps are kept as they are.
    ///
    /// # Errors
    ///
    /// Failures of the three stages are passed through unchanged:
    /// * [`SmhiError::LocateStation`] with `EmptyCatalog` if `catalog` is empty.
    /// * [`SmhiError::WeatherData`] with `Metadata` or `Payload` if the archive cannot be
    ///   reached for the station.
    /// * [`SmhiError::WeatherData`] with `EmptySeries` if the station has no usable
    ///   samples.
    pub fn resolve(
        &self,
        point: GeoPoint,
        target_time: NaiveDateTime,
        catalog: &StationCatalog,
    ) -> Result<WeatherResolution, SmhiError> {
        let closest = nearest(point, catalog, 1)?
            .into_iter()
            .next()
            .ok_or(LocateStationError::EmptyCatalog)?;

        let series = self.fetcher.fetch(&closest.station.id)?;
        let sample = nearest_sample(&series, target_time)?;

        info!(
            "Resolved {} °C at station {} ({:.2} km) for {}",
            sample.temperature_celsius, closest.station.id, closest.distance_km, target_time
        );

        Ok(WeatherResolution {
            temperature: sample.temperature_celsius,
            requested_time: target_time,
            measured_time: sample.timestamp,
            station_id: closest.station.id,
            station_name: closest.station.name,
            distance_km: round_to_hundredths(closest.distance_km),
        })
    }

    /// Downloads the full temperature series of one station.
    pub fn fetch_series(&self, station_id: &str) -> Result<TemperatureSeries, SmhiError> {
        Ok(self.fetcher.fetch(station_id)?)
    }

    pub fn config(&self) -> &ArchiveConfig {
        self.fetcher.config()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
