//! Core data models for the subunit dataset.

pub mod bbox;
pub mod subunit;

pub use bbox::{Bbox, ANTIMERIDIAN_EXTENT};
pub use subunit::{CodeField, CountrySubunit, NOT_APPLICABLE};

#[cfg(test)]
pub(crate) use subunit::fixtures;
