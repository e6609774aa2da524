use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failure reported by an [`HttpClient`](crate::HttpClient).
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

/// Why the station metadata did not yield a CSV link.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Failed to parse metadata JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Metadata has no CSV link at data[0].link[0].href")]
    MissingCsvLink,
}

/// Why the CSV payload could not be downloaded.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: StatusCode },
}

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to retrieve archive metadata for station '{station}'")]
    Metadata {
        station: String,
        #[source]
        source: MetadataError,
    },

    #[error("Failed to download temperature CSV from {url}")]
    Payload {
        url: String,
        #[source]
        source: PayloadError,
    },

    #[error("The temperature series holds no samples")]
    EmptySeries,
}
