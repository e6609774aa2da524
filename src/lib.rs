mod config;
mod distance;
mod error;
mod resolver;
mod stations;
mod types;
mod utils;
mod weather_data;

pub use config::*;
pub use distance::{distance, distance_many, EARTH_RADIUS_KM};
pub use error::{ErrorKind, SmhiError};
pub use resolver::WeatherResolver;
pub use utils::{parse_decimal, parse_timestamp, ParseError};

pub use types::geo_point::GeoPoint;
pub use types::resolution::WeatherResolution;
pub use types::station::{RankedStation, Station};
pub use types::temperature::{TemperatureSample, TemperatureSeries};

pub use stations::catalog::StationCatalog;
pub use stations::locate_station::nearest;
pub use weather_data::extractor::nearest_sample;
pub use weather_data::fetcher::ArchiveFetcher;
pub use weather_data::http::{BlockingHttpClient, HttpClient, HttpResponse};
pub use weather_data::payload::{parse_payload, TABLE_HEADER_PREFIX};

pub use stations::error::{CatalogError, LocateStationError};
pub use weather_data::error::{HttpError, MetadataError, PayloadError, WeatherDataError};
