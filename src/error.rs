use crate::stations::error::{CatalogError, LocateStationError};
use crate::weather_data::error::{HttpError, WeatherDataError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmhiError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Http(#[from] HttpError),
}

/// The cause of an [`SmhiError`], flattened for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No station to search: the catalog was empty.
    EmptyCatalog,
    /// The station metadata could not be retrieved or held no CSV link.
    Metadata,
    /// The CSV payload could not be retrieved.
    Payload,
    /// The station's series held no usable samples.
    EmptySeries,
    /// The station listing file could not be read.
    CatalogRead,
    /// The HTTP client could not be set up.
    Http,
}

impl SmhiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SmhiError::LocateStation(LocateStationError::EmptyCatalog) => ErrorKind::EmptyCatalog,
            SmhiError::WeatherData(WeatherDataError::Metadata { .. }) => ErrorKind::Metadata,
            SmhiError::WeatherData(WeatherDataError::Payload { .. }) => ErrorKind::Payload,
            SmhiError::WeatherData(WeatherDataError::EmptySeries) => ErrorKind::EmptySeries,
            SmhiError::Catalog(CatalogError::Read(..)) => ErrorKind::CatalogRead,
            SmhiError::Http(_) => ErrorKind::Http,
        }
    }
}
