//! ISO 3166 code resolution and the code indexes built on top of it.

mod index;
mod reference;
mod resolve;

pub use index::{CodeBuckets, IntegrityPolicy, IsoIndex};
pub use reference::{CountryCode, Iso3166, IsoReference};
pub use resolve::{best_guess, best_guess_iso2, best_guess_iso3, ISO3_PRECEDENCE};
