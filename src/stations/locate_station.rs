use crate::distance::distance;
use crate::stations::catalog::StationCatalog;
use crate::stations::error::LocateStationError;
use crate::types::geo_point::GeoPoint;
use crate::types::station::{RankedStation, Station};
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// Helper struct for BinaryHeap ordering
struct StationCandidate<'a> {
    distance_km: OrderedFloat<f64>,
    catalog_index: usize,
    station: &'a Station,
}

// Orders by distance, then by position in the catalog so equal distances resolve
// the same way on every run.
impl StationCandidate<'_> {
    fn key(&self) -> (OrderedFloat<f64>, usize) {
        (self.distance_km, self.catalog_index)
    }
}
impl PartialEq for StationCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for StationCandidate<'_> {}
impl PartialOrd for StationCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for StationCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Finds the `n` stations closest to `query`, nearest first.
///
/// Every station in the catalog is measured with the Haversine [`distance`]. The result
/// holds `min(n, catalog.len())` entries sorted ascending by distance; stations at
/// exactly the same distance keep their catalog order.
///
/// # Errors
///
/// Returns [`LocateStationError::EmptyCatalog`] if `n >= 1` and the catalog holds no
/// stations. Asking for zero stations always succeeds with an empty result.
///
/// # Examples
///
/// ```
/// use smhi_weather::{nearest, GeoPoint, Station, StationCatalog};
///
/// let catalog: StationCatalog = [
///     Station::new("71420", "Göteborg A", GeoPoint::new(57.7156, 11.9924)),
///     Station::new("98230", "Stockholm A", GeoPoint::new(59.3417, 18.0549)),
/// ]
/// .into_iter()
/// .collect();
///
/// let ranked = nearest(GeoPoint::new(59.3293, 18.0686), &catalog, 1).unwrap();
/// assert_eq!(ranked[0].station.id, "98230");
/// assert!(ranked[0].distance_km < 2.0);
/// ```
pub fn nearest(
    query: GeoPoint,
    catalog: &StationCatalog,
    n: usize,
) -> Result<Vec<RankedStation>, LocateStationError> {
    if n == 0 {
        return Ok(vec![]);
    }
    if catalog.is_empty() {
        return Err(LocateStationError::EmptyCatalog);
    }

    let mut heap: BinaryHeap<StationCandidate<'_>> =
        BinaryHeap::with_capacity(n.min(catalog.len()));

    for (catalog_index, station) in catalog.iter().enumerate() {
        let candidate = StationCandidate {
            distance_km: OrderedFloat(distance(query, station.location)),
            catalog_index,
            station,
        };

        if heap.len() < n {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            // Max-heap: the top is the worst candidate kept so far.
            heap.pop();
            heap.push(candidate);
        }
    }

    let ranked: Vec<RankedStation> = heap
        .into_sorted_vec()
        .into_iter()
        .map(|candidate| RankedStation {
            station: candidate.station.to_owned(),
            distance_km: candidate.distance_km.into_inner(),
        })
        .collect();

    if let Some(closest) = ranked.first() {
        debug!(
            "Nearest station to ({}, {}) is {} ({}) at {:.2} km",
            query.latitude,
            query.longitude,
            closest.station.id,
            closest.station.name,
            closest.distance_km
        );
    }
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StationCatalog {
        [
            Station::new("98230", "Stockholm A", GeoPoint::new(59.3417, 18.0549)),
            Station::new("71420", "Göteborg A", GeoPoint::new(57.7156, 11.9924)),
            Station::new("180940", "Kiruna Flygplats", GeoPoint::new(67.8167, 20.3333)),
            Station::new("53430", "Malmö A", GeoPoint::new(55.5714, 13.0734)),
            Station::new("97400", "Uppsala Aut", GeoPoint::new(59.8471, 17.6320)),
        ]
        .into_iter()
        .collect()
    }

    // Helper to validate basic query results
    fn validate_results(results: &[RankedStation], expected_len: usize) {
        assert_eq!(results.len(), expected_len);
        let mut last_dist = -1.0;
        for (i, ranked) in results.iter().enumerate() {
            assert!(
                ranked.distance_km >= last_dist,
                "Result {} ({}) distance {} < previous {}",
                i,
                ranked.station.id,
                ranked.distance_km,
                last_dist
            );
            last_dist = ranked.distance_km;
        }
    }

    #[test]
    fn results_are_sorted_and_truncated() {
        let catalog = catalog();
        let query = GeoPoint::new(59.3293, 18.0686);

        for n in 1..=catalog.len() + 2 {
            let results = nearest(query, &catalog, n).unwrap();
            validate_results(&results, n.min(catalog.len()));
        }

        let ids: Vec<String> = nearest(query, &catalog, 3)
            .unwrap()
            .into_iter()
            .map(|r| r.station.id)
            .collect();
        assert_eq!(ids, ["98230", "97400", "71420"]);
    }

    #[test]
    fn distances_match_haversine() {
        let catalog = catalog();
        let query = GeoPoint::new(57.7089, 11.9746);
        for ranked in nearest(query, &catalog, catalog.len()).unwrap() {
            assert_eq!(ranked.distance_km, distance(query, ranked.station.location));
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let empty = StationCatalog::default();
        assert!(matches!(
            nearest(GeoPoint::new(59.0, 18.0), &empty, 1),
            Err(LocateStationError::EmptyCatalog)
        ));
    }

    #[test]
    fn zero_results_requested() {
        assert!(nearest(GeoPoint::new(59.0, 18.0), &catalog(), 0)
            .unwrap()
            .is_empty());
        assert!(nearest(GeoPoint::new(59.0, 18.0), &StationCatalog::default(), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let here = GeoPoint::new(60.0, 15.0);
        let catalog: StationCatalog = [
            Station::new("far", "Far", GeoPoint::new(65.0, 15.0)),
            Station::new("b", "Twin B", here),
            Station::new("a", "Twin A", here),
            Station::new("c", "Twin C", here),
        ]
        .into_iter()
        .collect();

        let ids: Vec<String> = nearest(here, &catalog, 2)
            .unwrap()
            .into_iter()
            .map(|r| r.station.id)
            .collect();
        assert_eq!(ids, ["b", "a"]);

        let ids: Vec<String> = nearest(here, &catalog, 4)
            .unwrap()
            .into_iter()
            .map(|r| r.station.id)
            .collect();
        assert_eq!(ids, ["b", "a", "c", "far"]);
    }

    #[test]
    fn catalog_method_delegates() {
        let catalog = catalog();
        let query = GeoPoint::new(55.6, 13.0);
        assert_eq!(
            catalog.nearest(query, 2).unwrap(),
            nearest(query, &catalog, 2).unwrap()
        );
        assert_eq!(catalog.nearest(query, 1).unwrap()[0].station.id, "53430");
    }
}
