//! Grid quantization of the national bounding box.
//!
//! The box is rasterized into 10000 latitude rows by 1000 longitude columns.
//! A location code is the cell index `lat_index * 1000 + lon_index`; it is
//! not a hash, so every point inside one cell shares the same code.

use serde::Serialize;

use crate::coord::{BoundingBox, Coordinate};

/// Highest latitude index (rows are `0..=LAT_STEPS`).
pub const LAT_STEPS: u32 = 9999;

/// Highest longitude index (columns are `0..=LON_STEPS`).
pub const LON_STEPS: u32 = 999;

/// Multiplier separating the row from the column in a location code.
const ROW_STRIDE: u32 = 1000;

/// A single quantization cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub lat_index: u32,
    pub lon_index: u32,
}

impl GridCell {
    /// Quantizes a coordinate, clamping points outside `bounds` to the edge cells.
    pub fn from_coordinate(bounds: &BoundingBox, coord: &Coordinate) -> Self {
        let (lat, lon) = bounds.normalize(coord);
        Self {
            lat_index: (lat * LAT_STEPS as f64).floor() as u32,
            lon_index: (lon * LON_STEPS as f64).floor() as u32,
        }
    }

    /// Splits a 7-digit location code back into its row and column.
    pub fn from_location_code(code: u32) -> Self {
        Self {
            lat_index: code / ROW_STRIDE,
            lon_index: code % ROW_STRIDE,
        }
    }

    pub fn location_code(&self) -> u32 {
        self.lat_index * ROW_STRIDE + self.lon_index
    }

    /// The south-west corner of the cell.
    ///
    /// This is what approximate decoding returns; the original point lies
    /// somewhere north-east of it, within one cell.
    pub fn lower_bound(&self, bounds: &BoundingBox) -> Coordinate {
        bounds.denormalize(
            self.lat_index as f64 / LAT_STEPS as f64,
            self.lon_index as f64 / LON_STEPS as f64,
        )
    }

    /// The geographic extent of the cell, truncated to `bounds`.
    pub fn extent(&self, bounds: &BoundingBox) -> BoundingBox {
        let sw = self.lower_bound(bounds);
        let (lat_size, lon_size) = cell_size(bounds);
        BoundingBox {
            min_lat: sw.latitude,
            max_lat: (sw.latitude + lat_size).min(bounds.max_lat),
            min_lon: sw.longitude,
            max_lon: (sw.longitude + lon_size).min(bounds.max_lon),
        }
    }

    /// True if the cell touches the edge of the grid.
    pub fn is_edge(&self) -> bool {
        self.lat_index == 0
            || self.lat_index == LAT_STEPS
            || self.lon_index == 0
            || self.lon_index == LON_STEPS
    }
}

/// Size of one cell in degrees as `(lat, lon)`.
pub fn cell_size(bounds: &BoundingBox) -> (f64, f64) {
    (
        bounds.lat_span() / LAT_STEPS as f64,
        bounds.lon_span() / LON_STEPS as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::NIGERIA_BOUNDS;

    #[test]
    fn test_south_west_corner_is_origin() {
        let cell = GridCell::from_coordinate(&NIGERIA_BOUNDS, &Coordinate::new(4.2, 2.7));
        assert_eq!(cell, GridCell { lat_index: 0, lon_index: 0 });
        assert_eq!(cell.location_code(), 0);
    }

    #[test]
    fn test_north_east_corner_is_max() {
        let cell = GridCell::from_coordinate(&NIGERIA_BOUNDS, &Coordinate::new(13.9, 14.7));
        assert_eq!(cell.lat_index, LAT_STEPS);
        assert_eq!(cell.lon_index, LON_STEPS);
        assert_eq!(cell.location_code(), 9_999_999);
    }

    #[test]
    fn test_outside_points_clamp_to_edges() {
        let cell = GridCell::from_coordinate(&NIGERIA_BOUNDS, &Coordinate::new(51.5, -0.12));
        assert_eq!(cell.lat_index, LAT_STEPS);
        assert_eq!(cell.lon_index, 0);
        assert!(cell.is_edge());
    }

    #[test]
    fn test_location_code_split() {
        let cell = GridCell::from_location_code(8_472_910);
        assert_eq!(cell.lat_index, 8472);
        assert_eq!(cell.lon_index, 910);
        assert_eq!(cell.location_code(), 8_472_910);
    }

    #[test]
    fn test_lower_bound_of_origin() {
        let cell = GridCell::from_location_code(0);
        assert_eq!(cell.lower_bound(&NIGERIA_BOUNDS), Coordinate::new(4.2, 2.7));
    }

    #[test]
    fn test_extent_contains_quantized_point() {
        let point = Coordinate::new(6.5244, 3.3792);
        let cell = GridCell::from_coordinate(&NIGERIA_BOUNDS, &point);
        let extent = cell.extent(&NIGERIA_BOUNDS);

        assert!(extent.min_lat <= point.latitude && point.latitude <= extent.max_lat);
        assert!(extent.min_lon <= point.longitude && point.longitude <= extent.max_lon);
    }

    #[test]
    fn test_extent_of_last_cell_stays_in_bounds() {
        let cell = GridCell::from_location_code(9_999_999);
        let extent = cell.extent(&NIGERIA_BOUNDS);
        assert!(extent.max_lat <= NIGERIA_BOUNDS.max_lat);
        assert!(extent.max_lon <= NIGERIA_BOUNDS.max_lon);
    }

    #[test]
    fn test_cell_size() {
        let (lat, lon) = cell_size(&NIGERIA_BOUNDS);
        assert!((lat - 9.7 / 9999.0).abs() < 1e-12);
        assert!((lon - 12.0 / 999.0).abs() < 1e-12);
    }
}
