//! Best-guess ISO code resolution.
//!
//! The dataset spreads country codes over several overlapping fields and
//! fills the ones that do not apply with `-99`. Resolution walks an ordered
//! list of fields and keeps the first value the ISO reference recognises.

use super::IsoReference;
use crate::error::IntegrityError;
use crate::models::{CodeField, CountrySubunit};

/// Field precedence for alpha-3 resolution
pub const ISO3_PRECEDENCE: [CodeField; 7] = [
    CodeField::IsoA3,
    CodeField::Adm0A3,
    CodeField::Adm0A3Is,
    CodeField::Adm0A3Us,
    CodeField::GuA3,
    CodeField::SuA3,
    CodeField::SovA3,
];

/// First non-sentinel value among `fields` that satisfies `accept`
pub fn best_guess<'a, F>(
    subunit: &'a CountrySubunit,
    fields: &[CodeField],
    accept: F,
) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    fields
        .iter()
        .filter_map(|field| subunit.code(*field))
        .find(|&code| accept(code))
}

pub fn best_guess_iso3<'a>(
    subunit: &'a CountrySubunit,
    reference: &dyn IsoReference,
) -> Option<&'a str> {
    best_guess(subunit, &ISO3_PRECEDENCE, |code| reference.is_alpha3(code))
}

/// Alpha-2 code derived from the best-guess alpha-3 code.
///
/// Fails when the record's own valid `iso_a2` disagrees with the derived
/// code, which means the bundled dataset is inconsistent.
pub fn best_guess_iso2<'a>(
    subunit: &CountrySubunit,
    reference: &'a dyn IsoReference,
) -> Result<Option<&'a str>, IntegrityError> {
    let Some(alpha3) = best_guess_iso3(subunit, reference) else {
        return Ok(None);
    };

    let derived = reference
        .alpha2_for_alpha3(alpha3)
        .ok_or_else(|| IntegrityError::MissingAlpha2(alpha3.to_string()))?;

    if let Some(stated) = subunit.code(CodeField::IsoA2) {
        if reference.is_alpha2(stated) && stated != derived {
            return Err(IntegrityError::Alpha2Mismatch {
                subunit: subunit.name.clone(),
                stated: stated.to_string(),
                alpha3: alpha3.to_string(),
                derived: derived.to_string(),
            });
        }
    }

    Ok(Some(derived))
}
