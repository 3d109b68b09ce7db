//! Legacy checksum address scheme.
//!
//! Early clients generated location codes offline as
//! `crc32("{lat:.6},{lon:.6}") mod 10^7`. Those codes have no inverse and are
//! unrelated to the grid scheme, so a checksum DAN decoded through the grid
//! inverse lands on an arbitrary cell. They can only be resolved through a
//! [`CoordinateLookup`](super::CoordinateLookup) that recorded them.

use flate2::Crc;

use super::error::DanError;
use super::number::{Dan, MAX_LOCATION_CODE};
use crate::coord::Coordinate;
use crate::state;

/// Checksum location code for a coordinate.
#[deprecated(note = "checksum location codes cannot be decoded; use DanCodec::encode")]
pub fn checksum_location_code(coord: &Coordinate) -> u32 {
    let text = format!("{:.6},{:.6}", coord.latitude, coord.longitude);
    let mut crc = Crc::new();
    crc.update(text.as_bytes());
    crc.sum() % (MAX_LOCATION_CODE + 1)
}

/// Builds a checksum-scheme DAN from a centroid and a two-digit state code.
#[deprecated(note = "checksum DANs cannot be decoded; use DanCodec::encode")]
#[allow(deprecated)]
pub fn generate_checksum_dan(coord: &Coordinate, state_code: &str) -> Result<Dan, DanError> {
    let state = state::by_code(state_code)
        .ok_or_else(|| DanError::UnknownStateCode(state_code.to_string()))?;
    Ok(Dan::from_parts(state, checksum_location_code(coord)))
}
