//! Digital Access Number (DAN) codec.
//!
//! A DAN is a 12-digit address `[country][state][location]` assigned to a
//! building. The location part is the index of a cell in a fixed 10000×1000
//! grid laid over the national bounding box, so encoding is lossy: decoding
//! without an exact-lookup store recovers the cell, not the building.
//!
//! # Example
//!
//! ```
//! use dannav::dan::{DanCodec, Footprint, Precision};
//!
//! let codec = DanCodec::new();
//! let footprint = Footprint::new(vec![vec![3.3792, 6.5244]], "Lagos");
//!
//! let encoded = codec.encode(&footprint).unwrap();
//! assert_eq!(encoded.state_code, "24");
//!
//! let decoded = codec.decode(&encoded.formatted).unwrap();
//! assert_eq!(decoded.dan, encoded.dan);
//! assert_eq!(decoded.precision, Precision::Approximate);
//! ```

mod codec;
mod error;
mod footprint;
pub mod grid;
pub mod legacy;
mod lookup;
mod number;

pub use codec::{DanCodec, DecodedDan, EncodedDan, Precision};
pub use error::DanError;
pub use footprint::Footprint;
pub use grid::GridCell;
pub use lookup::{CoordinateLookup, LookupError};
pub use number::{format_dan, strip_separators, Dan, COUNTRY_CODE, DAN_LENGTH, MAX_LOCATION_CODE};

/// Encodes a footprint with the default national codec.
pub fn encode(footprint: &Footprint) -> Result<EncodedDan, DanError> {
    DanCodec::new().encode(footprint)
}

/// Decodes a DAN with the default codec (approximate only).
pub fn decode(dan: &str) -> Result<DecodedDan, DanError> {
    DanCodec::new().decode(dan)
}
