use crate::config::ArchiveConfig;
use crate::types::temperature::TemperatureSeries;
use crate::weather_data::error::{MetadataError, PayloadError, WeatherDataError};
use crate::weather_data::http::{BlockingHttpClient, HttpClient};
use crate::weather_data::payload::parse_payload;
use log::{info, warn};
use serde::Deserialize;

// Only data[0].link[0].href is read from the period metadata.
#[derive(Debug, Deserialize)]
struct PeriodMetadata {
    data: Option<Vec<PeriodData>>,
}

#[derive(Debug, Deserialize)]
struct PeriodData {
    link: Option<Vec<Link>>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: Option<String>,
}

impl PeriodMetadata {
    fn csv_link(self) -> Option<String> {
        self.data?.into_iter().next()?.link?.into_iter().next()?.href
    }
}

/// Downloads the temperature history of a single station from the SMHI archive.
///
/// Each [`fetch`](ArchiveFetcher::fetch) makes two sequential requests: the station's
/// period metadata, which points at a CSV file, and then that CSV file.
pub struct ArchiveFetcher<C = BlockingHttpClient> {
    client: C,
    config: ArchiveConfig,
}

impl<C: HttpClient> ArchiveFetcher<C> {
    pub fn new(client: C, config: ArchiveConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Fetches and parses the full temperature series of `station_id`.
    ///
    /// # Errors
    ///
    /// * [`WeatherDataError::Metadata`] if the metadata request fails, answers with a
    ///   non-2xx status, is not valid JSON or has no CSV link.
    /// * [`WeatherDataError::Payload`] if the CSV request fails or answers with a non-2xx
    ///   status.
    ///
    /// A payload in which no row parses gives an empty series, not an error.
    pub fn fetch(&self, station_id: &str) -> Result<TemperatureSeries, WeatherDataError> {
        let csv_url = self
            .csv_link(station_id)
            .map_err(|source| WeatherDataError::Metadata {
                station: station_id.to_string(),
                source,
            })?;

        let payload = self
            .download_payload(&csv_url)
            .map_err(|source| WeatherDataError::Payload {
                url: csv_url.clone(),
                source,
            })?;

        let series = parse_payload(&payload);
        info!(
            "Fetched {} temperature samples for station {}",
            series.len(),
            station_id
        );
        Ok(series)
    }

    fn csv_link(&self, station_id: &str) -> Result<String, MetadataError> {
        let url = self.config.metadata_url(station_id);
        info!("Requesting archive metadata from {}", url);

        let response = self.client.get(&url)?;
        if !response.is_success() {
            warn!("HTTP error for {}: {}", url, response.status);
            return Err(MetadataError::HttpStatus {
                url,
                status: response.status,
            });
        }

        let metadata: PeriodMetadata = serde_json::from_slice(&response.body)?;
        metadata.csv_link().ok_or(MetadataError::MissingCsvLink)
    }

    fn download_payload(&self, url: &str) -> Result<String, PayloadError> {
        info!("Downloading temperature CSV from {}", url);

        let response = self.client.get(url)?;
        if !response.is_success() {
            warn!("HTTP error for {}: {}", url, response.status);
            return Err(PayloadError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(response.text().into_owned())
    }
}
