use crate::domain::FieldBoundary;

/// Geographic bounding box in WGS84 degrees
#[derive(Debug, Clone)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Compute the bounding box of a boundary's vertices
    pub fn from_boundary(boundary: &FieldBoundary) -> Option<Self> {
        if boundary.is_empty() {
            return None;
        }

        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;

        for p in &boundary.points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Center point as (lat, lon), used to center a map view on the field
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Extent in degrees latitude
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Extent in degrees longitude
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}
