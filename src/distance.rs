//! Great-circle distance on a spherical Earth.

use crate::types::geo_point::GeoPoint;

/// Mean Earth radius used by the Haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two points in kilometers using the
/// Haversine formula.
///
/// No ellipsoidal correction is applied. The intermediate haversine term is clamped to
/// `[0, 1]` so that coincident and antipodal points never produce a NaN through
/// floating-point overshoot. NaN coordinates yield a NaN distance.
///
/// # Examples
///
/// ```
/// use smhi_weather::{distance, GeoPoint};
///
/// let stockholm = GeoPoint::new(59.3293, 18.0686);
/// let gothenburg = GeoPoint::new(57.7089, 11.9746);
/// let km = distance(stockholm, gothenburg);
/// assert!((396.5..=399.0).contains(&km));
/// ```
pub fn distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // clamp() passes NaN through
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Distances from `from` to each of `points`, in the same order.
pub fn distance_many(from: GeoPoint, points: &[GeoPoint]) -> Vec<f64> {
    points.iter().map(|&point| distance(from, point)).collect()
}
