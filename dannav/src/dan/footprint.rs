//! Building footprints as supplied by importers and the UI.

use serde::{Deserialize, Serialize};

use crate::coord::{mean_center, Coordinate};

/// A building outline: a ring of GeoJSON-ordered `[lon, lat, ...]` positions
/// plus the name of the state it lies in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub coordinates: Vec<Vec<f64>>,
    pub state: String,
}

impl Footprint {
    pub fn new(coordinates: Vec<Vec<f64>>, state: impl Into<String>) -> Self {
        Self {
            coordinates,
            state: state.into(),
        }
    }

    /// Builds a footprint from typed coordinates.
    pub fn from_ring(ring: &[Coordinate], state: impl Into<String>) -> Self {
        Self::new(
            ring.iter()
                .map(|c| vec![c.longitude, c.latitude])
                .collect(),
            state,
        )
    }

    /// A degenerate single-point footprint.
    pub fn from_point(point: Coordinate, state: impl Into<String>) -> Self {
        Self::from_ring(&[point], state)
    }

    /// Positions with at least two finite components; extra components are ignored.
    pub fn valid_points(&self) -> Vec<Coordinate> {
        self.coordinates
            .iter()
            .filter(|p| p.len() >= 2 && p[0].is_finite() && p[1].is_finite())
            .map(|p| Coordinate::from_lon_lat(p[0], p[1]))
            .collect()
    }

    /// Arithmetic mean of the valid positions, or `None` if there are none.
    pub fn centroid(&self) -> Option<Coordinate> {
        mean_center(&self.valid_points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_of_square() {
        let fp = Footprint::new(
            vec![
                vec![3.0, 6.0],
                vec![4.0, 6.0],
                vec![4.0, 7.0],
                vec![3.0, 7.0],
            ],
            "Lagos",
        );
        assert_eq!(fp.centroid(), Some(Coordinate::new(6.5, 3.5)));
    }

    #[test]
    fn test_centroid_is_vertex_mean_not_area_weighted() {
        // Closed ring repeats the first vertex, which biases the plain mean
        let fp = Footprint::new(
            vec![
                vec![0.0, 0.0],
                vec![2.0, 0.0],
                vec![2.0, 2.0],
                vec![0.0, 0.0],
            ],
            "Lagos",
        );
        assert_eq!(fp.centroid(), Some(Coordinate::new(0.5, 1.0)));
    }

    #[test]
    fn test_short_and_non_finite_positions_are_skipped() {
        let fp = Footprint::new(
            vec![
                vec![3.0],
                vec![],
                vec![f64::NAN, 6.0],
                vec![3.0, 6.0, 12.5],
                vec![5.0, 8.0],
            ],
            "Lagos",
        );
        assert_eq!(fp.valid_points().len(), 2);
        assert_eq!(fp.centroid(), Some(Coordinate::new(7.0, 4.0)));
    }

    #[test]
    fn test_empty_has_no_centroid() {
        assert!(Footprint::new(vec![], "Lagos").centroid().is_none());
        assert!(Footprint::new(vec![vec![1.0]], "Lagos").centroid().is_none());
    }

    #[test]
    fn test_from_ring_uses_lon_lat_order() {
        let fp = Footprint::from_point(Coordinate::new(6.5, 3.4), "Lagos");
        assert_eq!(fp.coordinates, vec![vec![3.4, 6.5]]);
    }
}
