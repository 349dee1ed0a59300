//! Diagnostic exports.

pub mod geojson;

pub use geojson::{feature_collection, write_feature_collection, FeatureCollection};
