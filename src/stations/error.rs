use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateStationError {
    #[error("Cannot search for the nearest station in an empty station catalog")]
    EmptyCatalog,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read station listing '{0}'")]
    Read(PathBuf, #[source] std::io::Error),
}
