use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use fieldacre::api::save_field;
use fieldacre::config::FileConfig;
use fieldacre::domain::{FieldBoundary, FieldRecord, SoilMetric};
use fieldacre::geojson;
use fieldacre::geometry::{
    GeoBounds, acres_to_hectares, epsilon_for_boundary, estimate_acres, simplify_boundary,
    spherical_area_m2,
};

/// Compute farm-field acreage and soil-health status from GPS boundary data
///
/// Examples:
///   # Acreage of a boundary drawn on the map, exported as GeoJSON
///   fieldacre field.geojson
///
///   # Inline vertices (lat,lon pairs) and a field name
///   fieldacre --points "18.4714,73.9881;18.4714,73.9886;18.4709,73.9886;18.4708,73.9881" -n "north plot"
///
///   # Classify soil readings alongside the acreage
///   fieldacre field.geojson --ph 6.2 --ec 1.4 --oc 0.6
///
///   # Save the field record to the configured backend
///   fieldacre field.geojson -n "north plot" --save
#[derive(Parser, Debug)]
#[command(name = "fieldacre")]
#[command(version, about, long_about = None)]
struct Args {
    /// Boundary file: GeoJSON Polygon/Feature/FeatureCollection, or a plain
    /// [[lat, lon], ...] JSON array
    input: Option<PathBuf>,

    /// Inline vertices as "lat,lon;lat,lon;..." (alternative to a file)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    points: Option<String>,

    /// Field name attached to the saved record
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Path to config file (optional, auto-searches fieldacre.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Boundary simplification level: 0=off (default), 1=light, 2=medium, 3=aggressive
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    simplify: u8,

    /// Save the field record to the configured endpoint
    #[arg(long)]
    save: bool,

    /// Soil pH reading
    #[arg(long)]
    ph: Option<f64>,

    /// Electrical conductivity reading, dS/m
    #[arg(long)]
    ec: Option<f64>,

    /// Organic carbon reading, percent
    #[arg(long)]
    oc: Option<f64>,

    /// Cation exchange capacity reading, cmol/kg
    #[arg(long)]
    cec: Option<f64>,

    /// Land surface temperature reading, degrees C
    #[arg(long)]
    lst: Option<f64>,

    /// Soil water content reading, percent
    #[arg(long)]
    moisture: Option<f64>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let boundary = load_boundary(&args)?;

    let simplify_level = if args.simplify != 0 {
        args.simplify
    } else {
        file_config.as_ref().map(|c| c.simplify).unwrap_or(0)
    };

    let boundary = if simplify_level > 0 {
        let epsilon = epsilon_for_boundary(&boundary) * simplify_level as f64;
        let simplified = simplify_boundary(&boundary, epsilon);
        if args.verbose && simplified.len() < boundary.len() {
            println!(
                "Simplified boundary: {} -> {} vertices",
                boundary.len(),
                simplified.len()
            );
        }
        simplified
    } else {
        boundary
    };

    let name = args
        .name
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.field_name.clone()))
        .unwrap_or_else(|| "field".to_string());

    let acres = estimate_acres(&boundary);

    println!("Field: {}", name);
    println!("Vertices: {}", boundary.len());
    if let Some(bounds) = GeoBounds::from_boundary(&boundary) {
        let (lat, lon) = bounds.center();
        println!("Center: ({:.6}, {:.6})", lat, lon);
    }
    println!("Area: {:.3} acres ({:.3} ha)", acres, acres_to_hectares(acres));
    if args.verbose {
        println!("Area: {:.1} m²", spherical_area_m2(&boundary));
    }

    let readings = collect_readings(&args);
    if !readings.is_empty() {
        println!();
        print_soil_table(&readings);
    }

    if args.save {
        let save_config = file_config
            .as_ref()
            .and_then(|c| c.save.clone())
            .context("--save requires a [save] section in the config file")?;

        let record = FieldRecord::from_boundary(&name, &boundary);
        let saved = save_field(&save_config, &record)?;
        println!();
        println!("Saved field '{}' as {}", name, saved.id);
    }

    Ok(())
}

fn load_boundary(args: &Args) -> Result<FieldBoundary> {
    let boundary = match (&args.input, &args.points) {
        (Some(_), Some(_)) => bail!("Provide either an input file or --points, not both"),
        (None, None) => bail!("Must provide an input file or --points"),
        (Some(path), None) => {
            let text = std::fs::read_to_string(path)
                .context(format!("Failed to read boundary file: {:?}", path))?;
            geojson::parse_boundary(&text)
                .context(format!("Failed to parse boundary from {:?}", path))?
        }
        (None, Some(points)) => parse_inline_points(points)?,
    };

    if !boundary.is_valid() {
        bail!(
            "Boundary has {} points, need at least 3 to enclose an area",
            boundary.len()
        );
    }

    Ok(boundary)
}

/// Parse "lat,lon;lat,lon;..." into a boundary
fn parse_inline_points(text: &str) -> Result<FieldBoundary> {
    let mut pairs = Vec::new();

    for (i, chunk) in text.split(';').enumerate() {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let (lat_text, lon_text) = chunk
            .split_once(',')
            .with_context(|| format!("Vertex {} is not a lat,lon pair: '{}'", i + 1, chunk))?;
        let lat: f64 = lat_text
            .trim()
            .parse()
            .with_context(|| format!("Vertex {} has a bad latitude: '{}'", i + 1, lat_text))?;
        let lon: f64 = lon_text
            .trim()
            .parse()
            .with_context(|| format!("Vertex {} has a bad longitude: '{}'", i + 1, lon_text))?;
        pairs.push((lat, lon));
    }

    Ok(FieldBoundary::from_pairs(&pairs))
}

fn collect_readings(args: &Args) -> Vec<(SoilMetric, f64)> {
    let mut readings = Vec::new();
    if let Some(v) = args.ph {
        readings.push((SoilMetric::Ph, v));
    }
    if let Some(v) = args.ec {
        readings.push((SoilMetric::Salinity, v));
    }
    if let Some(v) = args.oc {
        readings.push((SoilMetric::OrganicCarbon, v));
    }
    if let Some(v) = args.cec {
        readings.push((SoilMetric::CationExchange, v));
    }
    if let Some(v) = args.lst {
        readings.push((SoilMetric::SurfaceTemperature, v));
    }
    if let Some(v) = args.moisture {
        readings.push((SoilMetric::WaterContent, v));
    }
    readings
}

fn print_soil_table(readings: &[(SoilMetric, f64)]) {
    println!("Soil readings:");
    for (metric, value) in readings {
        let status = metric.classify(*value);
        let unit = metric.unit();
        println!(
            "  {:<20} {:>7.2}{:<8} {:<16} {:<8} {}",
            metric.to_string(),
            value,
            unit,
            format!("[{}]", status.label),
            status.color(),
            status.advice
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_points() {
        let boundary =
            parse_inline_points("18.4714,73.9881; 18.4714,73.9886 ;18.4709,73.9886").unwrap();
        assert_eq!(boundary.len(), 3);
        assert!((boundary.points[1].lat - 18.4714).abs() < 1e-9);
        assert!((boundary.points[1].lon - 73.9886).abs() < 1e-9);
    }

    #[test]
    fn test_parse_inline_points_negative_coords() {
        let boundary = parse_inline_points("-33.9,18.4;-33.8,18.5;-33.9,18.6").unwrap();
        assert!((boundary.points[0].lat + 33.9).abs() < 1e-9);
    }

    #[test]
    fn test_parse_inline_points_rejects_garbage() {
        assert!(parse_inline_points("18.4,abc;1,2;3,4").is_err());
        assert!(parse_inline_points("18.4;1,2;3,4").is_err());
    }

    #[test]
    fn test_boundary_from_tempfile() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type":"Polygon","coordinates":[[[73.98,18.47],[73.99,18.47],[73.99,18.48],[73.98,18.47]]]}}"#
        )
        .unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let boundary = geojson::parse_boundary(&text).unwrap();
        assert_eq!(boundary.len(), 3);
    }
}
