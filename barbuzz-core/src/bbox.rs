use crate::entities::*;

/// Rough length of one degree of latitude.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Computes a rectangular prefilter around a circle on the map.
///
/// The box must contain every point whose great-circle distance
/// from `center` is at most `radius`. False positives are fine,
/// they are discarded by the exact distance check.
pub trait BboxProjection {
    fn bbox_around(&self, center: MapPoint, radius: Distance) -> MapBbox;
}

/// Small-angle approximation with a fixed number of
/// kilometers per degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeApproximation;

impl BboxProjection for DegreeApproximation {
    fn bbox_around(&self, center: MapPoint, radius: Distance) -> MapBbox {
        debug_assert!(center.is_valid());
        debug_assert!(radius.is_valid());
        let radius_km = radius.to_km();
        let (lat_deg, lng_deg) = center.to_lat_lng_deg();

        let lat_range = radius_km / KM_PER_DEGREE;
        let south_lat_deg = lat_deg - lat_range;
        let north_lat_deg = lat_deg + lat_range;

        let lng_range = radius_km / (KM_PER_DEGREE * lat_deg.to_radians().cos());
        let full_lng_range = !lng_range.is_finite()
            || lng_range >= LngCoord::max().to_deg()
            || south_lat_deg <= LatCoord::min().to_deg()
            || north_lat_deg >= LatCoord::max().to_deg();

        let (west_lng_deg, east_lng_deg) = if full_lng_range {
            // reaches a pole or wraps around the whole globe
            (LngCoord::min().to_deg(), LngCoord::max().to_deg())
        } else {
            let lng_span = LngCoord::max().to_deg() - LngCoord::min().to_deg();
            let mut west = lng_deg - lng_range;
            if west < LngCoord::min().to_deg() {
                // wrap around
                west += lng_span;
            }
            let mut east = lng_deg + lng_range;
            if east > LngCoord::max().to_deg() {
                // wrap around
                east -= lng_span;
            }
            (west, east)
        };

        let bbox = MapBbox::new(
            MapPoint::new(
                LatCoord::saturating_from_deg(south_lat_deg),
                LngCoord::saturating_from_deg(west_lng_deg),
            ),
            MapPoint::new(
                LatCoord::saturating_from_deg(north_lat_deg),
                LngCoord::saturating_from_deg(east_lng_deg),
            ),
        );
        debug_assert!(bbox.is_valid());
        bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bbox_around_austin() {
        let center = MapPoint::from_lat_lng_deg(30.2672, -97.7431);
        let bbox = DegreeApproximation.bbox_around(center, Distance::from_meters(5000.0));
        let lat_range = 5.0 / 111.0;
        let lng_range = 5.0 / (111.0 * 30.2672_f64.to_radians().cos());
        assert!(approx_eq(bbox.southwest().lat().to_deg(), 30.2672 - lat_range));
        assert!(approx_eq(bbox.northeast().lat().to_deg(), 30.2672 + lat_range));
        assert!(approx_eq(bbox.southwest().lng().to_deg(), -97.7431 - lng_range));
        assert!(approx_eq(bbox.northeast().lng().to_deg(), -97.7431 + lng_range));
        assert!(bbox.contains_point(center));
    }

    #[test]
    fn bbox_contains_circle() {
        let center = MapPoint::from_lat_lng_deg(48.0, 9.0);
        let radius = Distance::from_km(10.0);
        let bbox = DegreeApproximation.bbox_around(center, radius);
        // points at the radius in each cardinal direction
        let north = MapPoint::from_lat_lng_deg(48.0 + 10.0 / 111.195, 9.0);
        let south = MapPoint::from_lat_lng_deg(48.0 - 10.0 / 111.195, 9.0);
        let east = MapPoint::from_lat_lng_deg(48.0, 9.13);
        assert!(MapPoint::distance(center, east).unwrap() < radius);
        for pt in [north, south, east] {
            assert!(bbox.contains_point(pt));
        }
    }

    #[test]
    fn wrap_around_antimeridian() {
        let center = MapPoint::from_lat_lng_deg(0.0, 179.99);
        let bbox = DegreeApproximation.bbox_around(center, Distance::from_km(10.0));
        assert!(bbox.is_valid());
        assert!(bbox.southwest().lng() > bbox.northeast().lng());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, -179.99)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 179.95)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 0.0)));
    }

    #[test]
    fn clamp_at_the_poles() {
        let center = MapPoint::from_lat_lng_deg(89.99, 10.0);
        let bbox = DegreeApproximation.bbox_around(center, Distance::from_km(5.0));
        assert!(bbox.is_valid());
        assert_eq!(bbox.northeast().lat(), LatCoord::max());
        assert_eq!(bbox.southwest().lng(), LngCoord::min());
        assert_eq!(bbox.northeast().lng(), LngCoord::max());

        let center = MapPoint::from_lat_lng_deg(-90.0, 0.0);
        let bbox = DegreeApproximation.bbox_around(center, Distance::from_km(1.0));
        assert!(bbox.is_valid());
        assert_eq!(bbox.southwest().lat(), LatCoord::min());
    }
}
