use serde::{Deserialize, Serialize};

/// A geographical coordinate in decimal degrees.
///
/// Latitude is positive north of the equator, longitude positive east of Greenwich.
///
/// # Examples
///
/// ```
/// use smhi_weather::GeoPoint;
///
/// let stockholm = GeoPoint::new(59.3293, 18.0686);
/// assert_eq!(stockholm.latitude, 59.3293);
/// assert_eq!(stockholm.longitude, 18.0686);
/// assert!(stockholm.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, within `[-180, 180]`.
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both coordinates are finite and inside their degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
