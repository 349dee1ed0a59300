//! Country Bounding Boxes - point-in-country and ISO-code lookups over the
//! bounding boxes of Natural Earth country subunits.
//!
//! This library provides the dataset, its one-time corrections, ISO code
//! resolution and the query engine used by the `cbb` binary.

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod iso;
pub mod lookup;
pub mod models;

pub use error::{Error, IntegrityError, Result};
pub use lookup::CountryBoxes;
pub use models::{Bbox, CodeField, CountrySubunit};
