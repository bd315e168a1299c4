use crate::domain::FieldBoundary;

/// Mean Earth radius in meters (IUGG mean radius)
const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Square meters per acre
const SQ_METERS_PER_ACRE: f64 = 4046.86;

/// Estimate the ground area enclosed by a field boundary, in square meters.
///
/// Uses the spherical shoelace approximation: for each consecutive vertex
/// pair (wrapping the last vertex back to the first, so the caller never
/// needs to pre-close the polygon),
///
///   sum += (lon2 - lon1) * (2 + sin(lat1) + sin(lat2))
///
/// with all angles in radians, then area = |sum| * R^2 / 2. Accurate for
/// field-sized plots; increasingly approximate for polygons spanning large
/// fractions of the globe.
///
/// Fewer than 3 vertices encloses nothing and yields exactly 0.0. The
/// result is independent of winding direction and of which vertex the
/// sequence starts at.
pub fn spherical_area_m2(boundary: &FieldBoundary) -> f64 {
    let points = &boundary.points;
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut sum = 0.0;

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n]; // implicit closure
        let lat1 = p1.lat.to_radians();
        let lat2 = p2.lat.to_radians();
        let lon1 = p1.lon.to_radians();
        let lon2 = p2.lon.to_radians();
        sum += (lon2 - lon1) * (2.0 + lat1.sin() + lat2.sin());
    }

    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

/// Estimate the enclosed area in acres (1 acre = 4046.86 m^2)
pub fn estimate_acres(boundary: &FieldBoundary) -> f64 {
    spherical_area_m2(boundary) / SQ_METERS_PER_ACRE
}

pub fn acres_to_hectares(acres: f64) -> f64 {
    acres * SQ_METERS_PER_ACRE / 10_000.0
}
