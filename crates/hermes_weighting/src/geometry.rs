use crate::geopoint::GeoPoint;
use crate::meters::Meters;

/// Sum of the great-circle lengths of every segment of the polyline
pub fn compute_geometry_distance(geometry: &[GeoPoint]) -> Meters {
    geometry
        .windows(2)
        .map(|segment| segment[0].haversine_distance(&segment[1]))
        .sum()
}

/// Elevations of the first and last point of the polyline, `None` when the
/// polyline has fewer than two points or either end lacks an elevation.
pub fn elevation_endpoints(geometry: &[GeoPoint]) -> Option<(f64, f64)> {
    if geometry.len() < 2 {
        return None;
    }

    let first = geometry.first()?.elevation()?;
    let last = geometry.last()?.elevation()?;

    Some((first, last))
}
