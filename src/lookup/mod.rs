//! Point-in-box and ISO-code lookups.
//!
//! Answers "which subunits could contain this point" with a linear scan of
//! bounding boxes, and "which subunits carry this code" through lazily built
//! ISO indexes.

mod service;

pub use service::CountryBoxes;
