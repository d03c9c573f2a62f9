//! Feed decoding
//!
//! The pure bytes-to-model transformation. Either the whole document
//! decodes into a complete [`EarthquakeFeed`] or decoding fails as a
//! whole; no partial result is ever exposed.

use super::types::EarthquakeFeed;
use crate::error::{Error, Result};

/// Decode one GeoJSON feed document.
///
/// Fails when the buffer is not valid JSON, a required field is missing
/// or has the wrong JSON type, an enumerated field carries an
/// undeclared raw value, a positional array (`coordinates`, `bbox`) has
/// the wrong length, or a number does not fit its target type.
pub fn decode_feed(bytes: &[u8]) -> Result<EarthquakeFeed> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode {
        message: format!("Failed to parse feed JSON: {e}"),
    })
}
