use serde::Serialize;
use serde_json::Value;

use crate::domain::{BoundaryPoint, FieldBoundary};
use crate::geojson;
use crate::geometry;

/// The payload persisted when a field is saved: the raw tapped vertices,
/// a GeoJSON polygon of the same boundary, and the estimated acreage.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRecord {
    pub name: String,
    /// Raw vertices as tapped, (lat, lon) order
    pub coordinates: Vec<BoundaryPoint>,
    /// GeoJSON Polygon ([lon, lat] on the wire, explicitly closed)
    pub geometry: Value,
    pub area_in_acres: f64,
}

impl FieldRecord {
    /// Build the save payload for a drawn boundary.
    ///
    /// The acreage is computed here, once per save, from the boundary as
    /// given; the boundary itself is not modified.
    pub fn from_boundary(name: impl Into<String>, boundary: &FieldBoundary) -> Self {
        Self {
            name: name.into(),
            coordinates: boundary.points.clone(),
            geometry: geojson::polygon_value(boundary),
            area_in_acres: geometry::estimate_acres(boundary),
        }
    }
}
