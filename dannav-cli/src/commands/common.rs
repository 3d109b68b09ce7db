//! Common types and utilities shared across CLI commands.

use std::path::Path;

use serde_json::Value;

use dannav::coord::Coordinate;
use dannav::navigation::RouteSummary;

use crate::error::CliError;

/// Read a whole input file.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: path.display().to_string(),
        error,
    })
}

fn invalid(path: &Path, reason: impl Into<String>) -> CliError {
    CliError::InvalidInput {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Load a footprint ring of `[lon, lat]` positions.
///
/// Accepts a bare ring, a GeoJSON Polygon geometry, or a Feature wrapping one.
pub fn load_footprint_ring(path: &Path) -> Result<Vec<Vec<f64>>, CliError> {
    let json = read_input(path)?;
    parse_footprint_ring(&json).map_err(|reason| invalid(path, reason))
}

pub(crate) fn parse_footprint_ring(json: &str) -> Result<Vec<Vec<f64>>, String> {
    let value: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let ring = match &value {
        Value::Array(_) => &value,
        Value::Object(map) => {
            let geometry = map.get("geometry").unwrap_or(&value);
            match geometry.get("type").and_then(Value::as_str) {
                Some("Polygon") => geometry
                    .get("coordinates")
                    .and_then(|rings| rings.get(0))
                    .ok_or("Polygon has no outer ring")?,
                Some(other) => return Err(format!("unsupported geometry type '{}'", other)),
                None => return Err("expected a ring or a Polygon geometry".to_string()),
            }
        }
        _ => return Err("expected a ring or a Polygon geometry".to_string()),
    };

    let points = ring.as_array().ok_or("ring must be an array")?;
    Ok(points
        .iter()
        .map(|point| {
            point
                .as_array()
                .map(|components| components.iter().map_while(Value::as_f64).collect())
                .unwrap_or_default()
        })
        .collect())
}

/// Load a recorded track: a JSON array of `{"latitude": .., "longitude": ..}`.
pub fn load_track(path: &Path) -> Result<Vec<Coordinate>, CliError> {
    let json = read_input(path)?;
    serde_json::from_str(&json).map_err(|e| invalid(path, e.to_string()))
}

/// Load a directions route summary.
pub fn load_route(path: &Path) -> Result<RouteSummary, CliError> {
    let json = read_input(path)?;
    RouteSummary::from_json(&json).map_err(|e| invalid(path, e.to_string()))
}

/// Validate a coordinate given on the command line.
pub fn coordinate_arg(lat: f64, lon: f64) -> Result<Coordinate, CliError> {
    Coordinate::try_new(lat, lon).map_err(|e| CliError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bare_ring() {
        let ring = parse_footprint_ring("[[3.37, 6.52], [3.38, 6.52, 12.0], [3.38]]").unwrap();
        assert_eq!(ring, vec![vec![3.37, 6.52], vec![3.38, 6.52, 12.0], vec![3.38]]);
    }

    #[test]
    fn test_polygon_feature() {
        let json = r#"{
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[7.49, 9.05], [7.50, 9.05], [7.50, 9.06]], [[0.0, 0.0]]]
            },
            "properties": {}
        }"#;
        let ring = parse_footprint_ring(json).unwrap();
        assert_eq!(ring.len(), 3);
        assert_eq!(ring[0], vec![7.49, 9.05]);
    }

    #[test]
    fn test_non_numeric_components_truncate() {
        let ring = parse_footprint_ring(r#"[["x", 6.52], [3.38, "y"], "bad"]"#).unwrap();
        assert_eq!(ring, vec![Vec::<f64>::new(), vec![3.38], Vec::new()]);
    }

    #[test]
    fn test_unsupported_geometry() {
        let err = parse_footprint_ring(r#"{"type": "LineString", "coordinates": []}"#).unwrap_err();
        assert!(err.contains("LineString"));
    }

    #[test]
    fn test_load_track() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"latitude": 6.51, "longitude": 3.372}}, {{"latitude": 6.52, "longitude": 3.378}}]"#
        )
        .unwrap();

        let track = load_track(file.path()).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track[1], Coordinate::new(6.52, 3.378));
    }

    #[test]
    fn test_missing_file() {
        let result = load_route(Path::new("/nonexistent/route.json"));
        assert!(matches!(result, Err(CliError::FileRead { .. })));
    }

    #[test]
    fn test_coordinate_arg_validates() {
        assert!(coordinate_arg(6.5, 3.4).is_ok());
        assert!(matches!(
            coordinate_arg(95.0, 3.4),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
