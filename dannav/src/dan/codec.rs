//! Grid-scheme DAN encoder and decoder.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::DanError;
use super::footprint::Footprint;
use super::grid::{cell_size, GridCell};
use super::lookup::CoordinateLookup;
use super::number::Dan;
use crate::coord::{BoundingBox, Coordinate, NIGERIA_BOUNDS};
use crate::state;

/// How a decoded coordinate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Recorded coordinate from the exact-lookup store.
    Exact,
    /// South-west corner of the DAN's grid cell.
    Approximate,
}

/// Result of encoding a footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedDan {
    pub dan: Dan,
    pub formatted: String,
    pub centroid: Coordinate,
    pub state: String,
    pub state_code: String,
    pub cell: GridCell,
}

/// Result of decoding a DAN. Same shape for exact and approximate decodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDan {
    pub dan: Dan,
    pub formatted: String,
    pub country_code: String,
    pub state_code: String,
    pub state: String,
    pub location_code: String,
    #[serde(rename = "coordinates")]
    pub coordinate: Coordinate,
    pub precision: Precision,
}

/// Encodes footprints to DANs and decodes DANs back to coordinates.
///
/// The codec itself holds no mutable state; clones share the lookup backend.
#[derive(Clone)]
pub struct DanCodec {
    bounds: BoundingBox,
    lookup: Option<Arc<dyn CoordinateLookup>>,
}

impl std::fmt::Debug for DanCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DanCodec")
            .field("bounds", &self.bounds)
            .field("has_lookup", &self.lookup.is_some())
            .finish()
    }
}

impl Default for DanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DanCodec {
    /// Codec over the national bounding box with no exact lookup.
    pub fn new() -> Self {
        Self {
            bounds: NIGERIA_BOUNDS,
            lookup: None,
        }
    }

    /// Attach an exact-coordinate lookup consulted before approximate decoding.
    pub fn with_lookup(mut self, lookup: Arc<dyn CoordinateLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Encodes a footprint using the state named in it.
    pub fn encode(&self, footprint: &Footprint) -> Result<EncodedDan, DanError> {
        let state = state::by_name(&footprint.state)
            .ok_or_else(|| DanError::UnknownState(footprint.state.clone()))?;
        let centroid = footprint.centroid().ok_or(DanError::EmptyFootprint)?;

        let cell = GridCell::from_coordinate(&self.bounds, &centroid);
        let dan = Dan::from_parts(state, cell.location_code());

        debug!(
            dan = %dan,
            lat = centroid.latitude,
            lon = centroid.longitude,
            state = state.name,
            "Encoded footprint"
        );

        Ok(EncodedDan {
            formatted: dan.formatted(),
            dan,
            centroid,
            state: state.name.to_string(),
            state_code: state.code.to_string(),
            cell,
        })
    }

    /// Encodes a single point.
    pub fn encode_point(
        &self,
        coordinate: Coordinate,
        state_name: &str,
    ) -> Result<EncodedDan, DanError> {
        self.encode(&Footprint::from_point(coordinate, state_name))
    }

    /// Decodes a DAN string, preferring an exact recorded coordinate.
    ///
    /// Lookup misses and lookup failures both fall back to the grid inverse;
    /// only malformed input is an error.
    pub fn decode(&self, input: &str) -> Result<DecodedDan, DanError> {
        let dan = Dan::parse(input)?;

        if let Some(lookup) = &self.lookup {
            match lookup.lookup(&dan) {
                Ok(Some(coordinate)) => {
                    debug!(dan = %dan, "Exact coordinate found");
                    return Ok(self.decoded(dan, coordinate, Precision::Exact));
                }
                Ok(None) => {
                    debug!(dan = %dan, "No recorded coordinate, using grid cell");
                }
                Err(e) => {
                    warn!(dan = %dan, error = %e, "Coordinate lookup failed, using grid cell");
                }
            }
        }

        Ok(self.decode_approximate(&dan))
    }

    /// Inverts the grid quantization without consulting any store.
    ///
    /// Returns the south-west corner of the DAN's cell, not the original centroid.
    pub fn decode_approximate(&self, dan: &Dan) -> DecodedDan {
        let cell = GridCell::from_location_code(dan.location_value());
        let coordinate = cell.lower_bound(&self.bounds);
        self.decoded(dan.clone(), coordinate, Precision::Approximate)
    }

    /// Geographic extent of the grid cell a DAN denotes.
    pub fn cell_bounds(&self, dan: &Dan) -> BoundingBox {
        GridCell::from_location_code(dan.location_value()).extent(&self.bounds)
    }

    /// Size of one grid cell in degrees as `(lat, lon)`.
    pub fn cell_size(&self) -> (f64, f64) {
        cell_size(&self.bounds)
    }

    fn decoded(&self, dan: Dan, coordinate: Coordinate, precision: Precision) -> DecodedDan {
        let state = dan.state();
        DecodedDan {
            formatted: dan.formatted(),
            country_code: dan.country_code().to_string(),
            state_code: state.code.to_string(),
            state: state.name.to_string(),
            location_code: dan.location_code().to_string(),
            coordinate,
            precision,
            dan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dan::lookup::LookupError;

    struct FixedLookup(Option<Coordinate>);

    impl CoordinateLookup for FixedLookup {
        fn lookup(&self, _dan: &Dan) -> Result<Option<Coordinate>, LookupError> {
            Ok(self.0)
        }
    }

    struct BrokenLookup;

    impl CoordinateLookup for BrokenLookup {
        fn lookup(&self, _dan: &Dan) -> Result<Option<Coordinate>, LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }
    }

    fn lagos_footprint() -> Footprint {
        Footprint::new(
            vec![
                vec![3.3790, 6.5242],
                vec![3.3794, 6.5242],
                vec![3.3794, 6.5246],
                vec![3.3790, 6.5246],
            ],
            "Lagos",
        )
    }

    #[test]
    fn test_encode_lagos() {
        let encoded = DanCodec::new().encode(&lagos_footprint()).unwrap();

        assert_eq!(encoded.state, "Lagos");
        assert_eq!(encoded.state_code, "24");
        assert_eq!(encoded.dan.as_str().len(), 12);
        assert!(encoded.dan.as_str().starts_with("23424"));
        assert_eq!(encoded.formatted, encoded.dan.formatted());
        assert!((encoded.centroid.latitude - 6.5244).abs() < 1e-9);
        assert!((encoded.centroid.longitude - 3.3792).abs() < 1e-9);
        assert_eq!(encoded.cell.location_code(), encoded.dan.location_value());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = DanCodec::new();
        let a = codec.encode(&lagos_footprint()).unwrap();
        let b = codec.encode(&lagos_footprint()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_state_case_insensitive() {
        let codec = DanCodec::new();
        let mut fp = lagos_footprint();
        fp.state = "lAgOs".to_string();
        assert_eq!(codec.encode(&fp).unwrap().state_code, "24");
    }

    #[test]
    fn test_encode_unknown_state() {
        let mut fp = lagos_footprint();
        fp.state = "Atlantis".to_string();
        assert_eq!(
            DanCodec::new().encode(&fp).unwrap_err(),
            DanError::UnknownState("Atlantis".to_string())
        );
    }

    #[test]
    fn test_encode_empty_footprint() {
        let fp = Footprint::new(vec![], "Lagos");
        assert_eq!(
            DanCodec::new().encode(&fp).unwrap_err(),
            DanError::EmptyFootprint
        );

        let fp = Footprint::new(vec![vec![3.0], vec![]], "Lagos");
        assert_eq!(
            DanCodec::new().encode(&fp).unwrap_err(),
            DanError::EmptyFootprint
        );
    }

    #[test]
    fn test_encode_outside_box_clamps() {
        let codec = DanCodec::new();
        let encoded = codec
            .encode_point(Coordinate::new(0.0, 0.0), "Lagos")
            .unwrap();
        assert_eq!(encoded.cell.lat_index, 0);
        assert_eq!(encoded.cell.lon_index, 0);
        assert_eq!(encoded.dan.as_str(), "234240000000");
    }

    #[test]
    fn test_decode_validation() {
        let codec = DanCodec::new();
        assert!(matches!(codec.decode("12345"), Err(DanError::Format(_))));
        assert!(matches!(
            codec.decode("99900000000"),
            Err(DanError::Format(_))
        ));
        assert!(matches!(
            codec.decode("999240000000"),
            Err(DanError::CountryCode { .. })
        ));
        assert!(matches!(
            codec.decode("234990000000"),
            Err(DanError::UnknownStateCode(_))
        ));
    }

    #[test]
    fn test_decode_approximate_round_trip() {
        let codec = DanCodec::new();
        let encoded = codec.encode(&lagos_footprint()).unwrap();
        let decoded = codec.decode(encoded.dan.as_str()).unwrap();

        let (lat_size, lon_size) = codec.cell_size();
        assert_eq!(decoded.precision, Precision::Approximate);
        assert_eq!(decoded.state, "Lagos");
        assert!(decoded.coordinate.latitude <= encoded.centroid.latitude);
        assert!(encoded.centroid.latitude - decoded.coordinate.latitude < lat_size);
        assert!(decoded.coordinate.longitude <= encoded.centroid.longitude);
        assert!(encoded.centroid.longitude - decoded.coordinate.longitude < lon_size);
    }

    #[test]
    fn test_decode_shape() {
        let decoded = DanCodec::new().decode("234-24-8472910").unwrap();
        assert_eq!(decoded.dan.as_str(), "234248472910");
        assert_eq!(decoded.formatted, "234-24-8472910");
        assert_eq!(decoded.country_code, "234");
        assert_eq!(decoded.state_code, "24");
        assert_eq!(decoded.location_code, "8472910");
    }

    #[test]
    fn test_decode_prefers_exact_lookup() {
        let exact = Coordinate::new(6.52441, 3.37921);
        let codec = DanCodec::new().with_lookup(Arc::new(FixedLookup(Some(exact))));

        let decoded = codec.decode("234248472910").unwrap();
        assert_eq!(decoded.coordinate, exact);
        assert_eq!(decoded.precision, Precision::Exact);
    }

    #[test]
    fn test_decode_lookup_miss_falls_back() {
        let codec = DanCodec::new().with_lookup(Arc::new(FixedLookup(None)));
        let decoded = codec.decode("234248472910").unwrap();
        let approx = DanCodec::new().decode("234248472910").unwrap();

        assert_eq!(decoded, approx);
        assert_eq!(decoded.precision, Precision::Approximate);
    }

    #[test]
    fn test_decode_lookup_failure_falls_back() {
        let codec = DanCodec::new().with_lookup(Arc::new(BrokenLookup));
        let decoded = codec.decode("234248472910").unwrap();
        assert_eq!(decoded.precision, Precision::Approximate);
    }

    #[test]
    fn test_cell_bounds_contains_encoded_centroid() {
        let codec = DanCodec::new();
        let encoded = codec.encode(&lagos_footprint()).unwrap();
        let cell = codec.cell_bounds(&encoded.dan);
        assert!(cell.contains(&encoded.centroid));
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let decoded = DanCodec::new().decode("234248472910").unwrap();
        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["stateCode"], "24");
        assert_eq!(json["countryCode"], "234");
        assert_eq!(json["precision"], "approximate");
        assert_eq!(json["dan"], "234248472910");
        assert!(json["coordinates"]["latitude"].is_number());
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_round_trip_within_one_cell(
                lat in 4.2..13.9_f64,
                lon in 2.7..14.7_f64,
            ) {
                let codec = DanCodec::new();
                let encoded = codec.encode_point(Coordinate::new(lat, lon), "Kano")?;
                let decoded = codec.decode_approximate(&encoded.dan);
                let (lat_size, lon_size) = codec.cell_size();

                let lat_err = lat - decoded.coordinate.latitude;
                let lon_err = lon - decoded.coordinate.longitude;
                prop_assert!(lat_err >= -1e-9 && lat_err < lat_size + 1e-9,
                    "lat error {} exceeds cell {}", lat_err, lat_size);
                prop_assert!(lon_err >= -1e-9 && lon_err < lon_size + 1e-9,
                    "lon error {} exceeds cell {}", lon_err, lon_size);
            }

            #[test]
            fn test_every_location_code_decodes_inside_bounds(
                code in 0u32..=9_999_999,
            ) {
                let codec = DanCodec::new();
                let lagos = state::by_name("Lagos").unwrap();
                let dan = Dan::from_parts(lagos, code);

                let decoded = codec.decode_approximate(&dan);
                prop_assert!(NIGERIA_BOUNDS.contains(&decoded.coordinate));
                prop_assert_eq!(decoded.dan.location_value(), code);
            }

            #[test]
            fn test_any_point_encodes(
                lat in -90.0..90.0_f64,
                lon in -180.0..180.0_f64,
            ) {
                let codec = DanCodec::new();
                let encoded = codec.encode_point(Coordinate::new(lat, lon), "Lagos")?;
                prop_assert!(encoded.dan.location_value() <= 9_999_999);
                if !NIGERIA_BOUNDS.contains(&Coordinate::new(lat, lon)) {
                    prop_assert!(encoded.cell.is_edge());
                }
            }
        }
    }
}
