use geo::{LineString, Simplify};

use crate::domain::{BoundaryPoint, FieldBoundary};
use crate::geometry::GeoBounds;

/// Simplify a hand-drawn boundary with Douglas-Peucker.
///
/// Dense tap/drag traces carry far more vertices than the field shape
/// needs. Boundaries with fewer than 5 vertices, or results that collapse
/// below a valid polygon, pass through unchanged.
pub fn simplify_boundary(boundary: &FieldBoundary, epsilon_deg: f64) -> FieldBoundary {
    if boundary.len() < 5 {
        return boundary.clone();
    }

    let line: LineString<f64> = boundary
        .points
        .iter()
        .map(|p| geo::coord! { x: p.lon, y: p.lat })
        .collect();

    let simplified = line.simplify(&epsilon_deg);

    if simplified.0.len() < 4 {
        return boundary.clone();
    }

    FieldBoundary::new(
        simplified
            .0
            .into_iter()
            .map(|c| BoundaryPoint::new(c.y, c.x))
            .collect(),
    )
}

/// Pick a simplification epsilon (degrees) from the boundary's extent.
///
/// Scales with the larger span so a hectare plot and a hundred-hectare
/// plot lose a similar fraction of trace detail.
pub fn epsilon_for_boundary(boundary: &FieldBoundary) -> f64 {
    let Some(bounds) = GeoBounds::from_boundary(boundary) else {
        return 0.0;
    };

    let span = bounds.lat_span().max(bounds.lon_span());
    // ~0.2% of the extent
    span * 0.002
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_boundary_passes_through() {
        let boundary =
            FieldBoundary::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let result = simplify_boundary(&boundary, 0.1);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_simplify_drops_near_collinear_vertices() {
        // Three square sides with a redundant midpoint on each edge;
        // Douglas-Peucker keeps polyline endpoints, so the trace starts
        // and ends on corners
        let boundary = FieldBoundary::from_pairs(&[
            (0.0, 0.0),
            (0.0, 0.0005),
            (0.0, 0.001),
            (0.0005, 0.001),
            (0.001, 0.001),
            (0.001, 0.0005),
            (0.001, 0.0),
        ]);
        let result = simplify_boundary(&boundary, 0.0001);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_epsilon_scales_with_extent() {
        let small =
            FieldBoundary::from_pairs(&[(0.0, 0.0), (0.0, 0.001), (0.001, 0.001)]);
        let large = FieldBoundary::from_pairs(&[(0.0, 0.0), (0.0, 0.1), (0.1, 0.1)]);
        assert!(epsilon_for_boundary(&large) > epsilon_for_boundary(&small));
    }
}
