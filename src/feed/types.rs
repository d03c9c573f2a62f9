//! Feed data types
//!
//! Shapes follow the USGS GeoJSON summary format:
//! <https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php>
//!
//! Unknown document keys (`type`, `metadata`, per-feature extras) are
//! ignored on decode; only the modeled subset is retained.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The root feed document: every significant earthquake in the window,
/// plus the bounding box covering all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeed {
    /// Earthquake event records, in feed order
    pub features: Vec<Feature>,
    /// Envelope covering every feature in the feed
    pub bbox: BoundingBox,
}

/// One earthquake event record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Event identifier, unique within the feed
    pub id: String,
    /// Event attributes
    pub properties: Properties,
    /// Event location
    pub geometry: Geometry,
}

/// Event attributes as reported by USGS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Display title, e.g. `M 6.5 - 42km SSE of Somewhere`
    pub title: String,
    /// Magnitude
    pub mag: f64,
    /// Human-readable location description
    pub place: String,
    /// Origin time, epoch milliseconds
    pub time: i64,
    /// Last update time, epoch milliseconds
    pub updated: i64,
    /// Magnitude calculation method, e.g. `mww`
    #[serde(rename = "magType")]
    pub mag_type: String,
    /// Tsunami flag
    pub tsunami: Tsunami,
    /// Link to the event detail document, kept opaque
    pub detail: String,
    /// PAGER alert level; absent until an alert has been issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    /// Review status of the event record
    pub status: Status,
}

/// Tsunami flag, encoded by the feed as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Tsunami {
    /// No tsunami expected
    None = 0,
    /// Event in an oceanic region with tsunami potential
    Possible = 1,
}

/// PAGER alert level, encoded by the feed as a lowercase string token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    Green,
    Yellow,
    Orange,
    Red,
}

impl Alert {
    /// The raw feed token for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Alert::Green => "green",
            Alert::Yellow => "yellow",
            Alert::Orange => "orange",
            Alert::Red => "red",
        }
    }
}

/// Review status of an event record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Automatic,
    Reviewed,
    Deleted,
}

impl Status {
    /// The raw feed token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Automatic => "automatic",
            Status::Reviewed => "reviewed",
            Status::Deleted => "deleted",
        }
    }
}

/// Event location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Position as `[longitude, latitude, depth]`
    pub coordinates: Coordinates,
}

impl Geometry {
    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    /// Depth in kilometers
    pub fn depth(&self) -> f64 {
        self.coordinates.depth()
    }
}

/// Position triple `[longitude, latitude, depth]`.
///
/// Decoding fails unless the JSON array has exactly 3 elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates([f64; 3]);

impl Coordinates {
    /// Build a position from its components
    pub fn new(longitude: f64, latitude: f64, depth: f64) -> Self {
        Self([longitude, latitude, depth])
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.0[1]
    }

    /// Depth in kilometers
    pub fn depth(&self) -> f64 {
        self.0[2]
    }
}

/// Feed envelope as `[minLon, minLat, minDepth, maxLon, maxLat, maxDepth]`.
///
/// Decoding fails unless the JSON array has exactly 6 elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox([f64; 6]);

impl BoundingBox {
    /// Build a bounding box from its ordered components
    pub fn new(values: [f64; 6]) -> Self {
        Self(values)
    }

    /// Westernmost longitude
    pub fn minimum_longitude(&self) -> f64 {
        self.0[0]
    }

    /// Southernmost latitude
    pub fn minimum_latitude(&self) -> f64 {
        self.0[1]
    }

    /// Shallowest depth in kilometers
    pub fn minimum_depth(&self) -> f64 {
        self.0[2]
    }

    /// Easternmost longitude
    pub fn maximum_longitude(&self) -> f64 {
        self.0[3]
    }

    /// Northernmost latitude
    pub fn maximum_latitude(&self) -> f64 {
        self.0[4]
    }

    /// Deepest depth in kilometers
    pub fn maximum_depth(&self) -> f64 {
        self.0[5]
    }

    /// The raw ordered components
    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }
}
