use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use crate::domain::{BoundaryPoint, FieldBoundary};

/// Serialize a boundary as a GeoJSON Polygon value.
///
/// GeoJSON positions are [lon, lat] and rings must repeat the first
/// position at the end; both conversions happen here so the in-process
/// representation stays (lat, lon) and implicitly closed.
pub fn polygon_value(boundary: &FieldBoundary) -> Value {
    let mut ring: Vec<Value> = boundary
        .points
        .iter()
        .map(|p| json!([p.lon, p.lat]))
        .collect();

    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }

    json!({
        "type": "Polygon",
        "coordinates": [ring],
    })
}

/// Parse a field boundary from GeoJSON text.
///
/// Accepts a Polygon geometry, a Feature wrapping one, a FeatureCollection
/// (the first polygon wins), or a plain [[lat, lon], ...] array. A closing
/// position equal to the first is dropped; closure stays implicit.
pub fn parse_boundary(text: &str) -> Result<FieldBoundary> {
    let value: Value = serde_json::from_str(text).context("Failed to parse input as JSON")?;

    // Plain [[lat, lon], ...] array input
    if let Some(pairs) = value.as_array() {
        return parse_pair_array(pairs);
    }

    let geometry = find_polygon(&value)
        .context("No Polygon geometry found in GeoJSON input")?;

    let ring = geometry
        .get("coordinates")
        .and_then(|c| c.get(0))
        .and_then(Value::as_array)
        .context("Polygon geometry has no exterior ring")?;

    let mut points = Vec::with_capacity(ring.len());
    for position in ring {
        let (lon, lat) = parse_position(position)?;
        points.push(BoundaryPoint::new(lat, lon));
    }

    drop_closing_point(&mut points);

    if points.len() < 3 {
        bail!("Boundary has {} points, need at least 3", points.len());
    }

    Ok(FieldBoundary::new(points))
}

fn find_polygon(value: &Value) -> Option<&Value> {
    match value.get("type").and_then(Value::as_str) {
        Some("Polygon") => Some(value),
        Some("Feature") => value.get("geometry").and_then(find_polygon),
        Some("FeatureCollection") => value
            .get("features")
            .and_then(Value::as_array)
            .and_then(|features| features.iter().find_map(find_polygon)),
        _ => None,
    }
}

fn parse_position(position: &Value) -> Result<(f64, f64)> {
    let pair = position
        .as_array()
        .filter(|p| p.len() >= 2)
        .context("GeoJSON position must be a [lon, lat] array")?;
    let lon = pair[0].as_f64().context("Longitude is not a number")?;
    let lat = pair[1].as_f64().context("Latitude is not a number")?;
    Ok((lon, lat))
}

fn parse_pair_array(pairs: &[Value]) -> Result<FieldBoundary> {
    let mut points = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let arr = pair
            .as_array()
            .filter(|p| p.len() >= 2)
            .context("Expected [lat, lon] pairs")?;
        let lat = arr[0].as_f64().context("Latitude is not a number")?;
        let lon = arr[1].as_f64().context("Longitude is not a number")?;
        points.push(BoundaryPoint::new(lat, lon));
    }

    drop_closing_point(&mut points);

    if points.len() < 3 {
        bail!("Boundary has {} points, need at least 3", points.len());
    }

    Ok(FieldBoundary::new(points))
}

fn drop_closing_point(points: &mut Vec<BoundaryPoint>) {
    if points.len() > 3 && points.first() == points.last() {
        points.pop();
    }
}
