use serde::{Deserialize, Serialize};

/// One vertex of a field boundary, in WGS84 degrees.
///
/// Coordinate order is (lat, lon) everywhere in-process. GeoJSON's
/// [lon, lat] ordering exists only at the wire boundary and is converted
/// on parse/serialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub lat: f64,
    pub lon: f64,
}

impl BoundaryPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An ordered sequence of boundary vertices drawn on the map.
///
/// The last vertex implicitly connects back to the first; callers are not
/// required to repeat the first point at the end.
#[derive(Debug, Clone, Default)]
pub struct FieldBoundary {
    pub points: Vec<BoundaryPoint>,
}

impl FieldBoundary {
    pub fn new(points: Vec<BoundaryPoint>) -> Self {
        Self { points }
    }

    /// Build a boundary from (lat, lon) pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs
                .iter()
                .map(|&(lat, lon)| BoundaryPoint::new(lat, lon))
                .collect(),
        }
    }

    /// A boundary needs at least 3 vertices to enclose any area
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertices as (lat, lon) tuples
    pub fn as_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.lat, p.lon)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_validity() {
        let two = FieldBoundary::from_pairs(&[(0.0, 0.0), (0.0, 1.0)]);
        assert!(!two.is_valid());

        let three = FieldBoundary::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert!(three.is_valid());
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let boundary = FieldBoundary::from_pairs(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(boundary.points[1].lat, 3.0);
        assert_eq!(boundary.points[1].lon, 4.0);
        assert_eq!(boundary.as_pairs(), vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    }
}
