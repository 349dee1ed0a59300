//! Axis-aligned bounding boxes in lon/lat degrees.

use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Longitude extent above which a box is treated as wrapping the antimeridian.
pub const ANTIMERIDIAN_EXTENT: f64 = 340.0;

/// Bounding box `(min_lon, min_lat, max_lon, max_lat)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bbox {
    pub const fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Inclusive containment test on all four edges
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.min_lon <= lon && lon <= self.max_lon && self.min_lat <= lat && lat <= self.max_lat
    }

    pub fn lon_extent(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// True for raw boxes of shapes that straddle the ±180° meridian, which
    /// the source dataset reports as (nearly) world-wide.
    pub fn spans_antimeridian(&self) -> bool {
        self.lon_extent() > ANTIMERIDIAN_EXTENT
    }

    pub fn is_normalized(&self) -> bool {
        self.min_lon <= self.max_lon && self.min_lat <= self.max_lat
    }

    /// Closed four-corner ring, counter-clockwise from the south-west corner
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            (self.min_lon, self.min_lat),
            (self.max_lon, self.min_lat),
            (self.max_lon, self.max_lat),
            (self.min_lon, self.max_lat),
            (self.min_lon, self.min_lat),
        ]);
        Polygon::new(ring, vec![])
    }
}

impl std::fmt::Display for Bbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}
