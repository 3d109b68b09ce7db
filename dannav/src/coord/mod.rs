//! Geographic primitives shared by the address codec and the progress tracker.
//!
//! Provides the WGS84 [`Coordinate`] type, the national [`BoundingBox`] used to
//! quantize addresses, and great-circle distance on a spherical Earth.

mod types;

pub use types::{BoundingBox, CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bounding box of Nigeria used for address quantization.
pub const NIGERIA_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 4.2,
    max_lat: 13.9,
    min_lon: 2.7,
    max_lon: 14.7,
};

/// Great-circle distance between two coordinates in kilometers.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
#[inline]
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of a set of coordinates (not area-weighted).
///
/// Returns `None` for an empty input.
pub fn mean_center<'a, I>(coords: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let (count, lat_sum, lon_sum) = coords
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, lat, lon), c| {
            (n + 1, lat + c.latitude, lon + c.longitude)
        });

    if count == 0 {
        return None;
    }

    Some(Coordinate::new(
        lat_sum / count as f64,
        lon_sum / count as f64,
    ))
}
