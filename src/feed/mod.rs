//! Feed schema model
//!
//! Typed mirror of the USGS significant-earthquakes GeoJSON subset.
//!
//! # Overview
//!
//! The model is a tree of immutable value records, built atomically by
//! [`decode_feed`] from a single JSON document. Enumerated fields decode
//! from their exact raw representation (`tsunami` from an integer,
//! `alert`/`status` from lowercase string tokens) and fail on anything
//! outside the declared variants. The positional arrays (`bbox`,
//! `coordinates`) are fixed-length newtypes, so a wrong-length array is
//! a decode failure rather than an indexing hazard later.

mod decode;
mod types;

pub use decode::decode_feed;
pub use types::{
    Alert, BoundingBox, Coordinates, EarthquakeFeed, Feature, Geometry, Properties, Status,
    Tsunami,
};

#[cfg(test)]
mod tests;
