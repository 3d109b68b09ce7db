//! Core geographic types: coordinates and bounding boxes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum valid latitude (WGS84).
pub const MIN_LAT: f64 = -90.0;

/// Maximum valid latitude (WGS84).
pub const MAX_LAT: f64 = 90.0;

/// Minimum valid longitude (WGS84).
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude (WGS84).
pub const MAX_LON: f64 = 180.0;

/// Errors raised when constructing geographic values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    #[error("Invalid bounding box: min ({min_lat}, {min_lon}) must be below max ({max_lat}, {max_lon})")]
    InvalidBounds {
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    },
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range validation.
    ///
    /// Use [`Coordinate::try_new`] for untrusted input.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting values outside the WGS84 range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Creates a coordinate from a GeoJSON-ordered `[lon, lat]` position.
    pub const fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self::new(latitude, longitude)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        super::haversine_km(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// An axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Creates a bounding box, requiring strictly positive extents.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, CoordError> {
        if !(min_lat < max_lat && min_lon < max_lon) {
            return Err(CoordError::InvalidBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            });
        }
        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Latitude extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Returns true if the coordinate lies inside the box (edges inclusive).
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.latitude)
            && (self.min_lon..=self.max_lon).contains(&coord.longitude)
    }

    /// Maps a coordinate to `(lat, lon)` fractions of the box, clamped to `[0, 1]`.
    ///
    /// Points outside the box collapse onto the nearest edge.
    pub fn normalize(&self, coord: &Coordinate) -> (f64, f64) {
        let lat = ((coord.latitude - self.min_lat) / self.lat_span()).clamp(0.0, 1.0);
        let lon = ((coord.longitude - self.min_lon) / self.lon_span()).clamp(0.0, 1.0);
        (lat, lon)
    }

    /// Inverse of [`BoundingBox::normalize`] for fractions inside `[0, 1]`.
    pub fn denormalize(&self, lat_fraction: f64, lon_fraction: f64) -> Coordinate {
        Coordinate::new(
            self.min_lat + lat_fraction * self.lat_span(),
            self.min_lon + lon_fraction * self.lon_span(),
        )
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Coordinate {
        self.denormalize(0.5, 0.5)
    }
}
