//! Code -> subunits indexes.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{error, info};

use super::{best_guess_iso2, best_guess_iso3, IsoReference};
use crate::error::IntegrityError;
use crate::models::CountrySubunit;

/// How index construction treats inconsistent records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    /// Abort the build on the first inconsistent record
    #[default]
    Strict,
    /// Log the inconsistency and index the record under the derived code
    Lenient,
}

/// Buckets keyed by code; `None` collects records without a resolvable code.
/// Values are positions in the record store, in store order.
pub type CodeBuckets = BTreeMap<Option<String>, Vec<usize>>;

#[derive(Debug, Clone, Default)]
pub struct IsoIndex {
    alpha2: CodeBuckets,
    alpha3: CodeBuckets,
}

impl IsoIndex {
    pub fn build(
        subunits: &[CountrySubunit],
        reference: &dyn IsoReference,
        policy: IntegrityPolicy,
    ) -> Result<Self, IntegrityError> {
        info!("Building ISO index for {} subunits...", subunits.len());

        let mut index = Self::default();

        for (pos, subunit) in subunits.iter().enumerate() {
            let alpha3 = best_guess_iso3(subunit, reference);
            let alpha2 = match best_guess_iso2(subunit, reference) {
                Ok(code) => code.map(str::to_string),
                Err(IntegrityError::Alpha2Mismatch { derived, .. })
                    if policy == IntegrityPolicy::Lenient =>
                {
                    error!(
                        "Subunit '{}' has inconsistent alpha-2 '{}', indexing under '{}'",
                        subunit.name, subunit.iso_a2, derived
                    );
                    Some(derived)
                }
                Err(e) => return Err(e),
            };

            index
                .alpha2
                .entry(alpha2)
                .or_default()
                .push(pos);
            index
                .alpha3
                .entry(alpha3.map(str::to_string))
                .or_default()
                .push(pos);
        }

        info!(
            "ISO index built: {} alpha-2 buckets, {} alpha-3 buckets, {} unresolved subunits",
            index.alpha2.len(),
            index.alpha3.len(),
            index.unresolved().len()
        );

        Ok(index)
    }

    /// Store positions for an upper-case alpha-2 code
    pub fn by_alpha2(&self, code: &str) -> &[usize] {
        self.alpha2
            .get(&Some(code.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Store positions for an upper-case alpha-3 code
    pub fn by_alpha3(&self, code: &str) -> &[usize] {
        self.alpha3
            .get(&Some(code.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Positions of subunits with no resolvable alpha-3 code
    pub fn unresolved(&self) -> &[usize] {
        self.alpha3.get(&None).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn alpha2_buckets(&self) -> &CodeBuckets {
        &self.alpha2
    }

    pub fn alpha3_buckets(&self) -> &CodeBuckets {
        &self.alpha3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::Iso3166;
    use crate::models::fixtures::subunit;
    use crate::models::Bbox;

    fn sample() -> Vec<CountrySubunit> {
        let b = Bbox::new(0.0, 0.0, 1.0, 1.0);
        let mut sicily = subunit("Sicily", "IT", "-99", b);
        sicily.adm0_a3 = "ITA".to_string();
        vec![
            subunit("Italy", "IT", "ITA", b),
            subunit("Afghanistan", "AF", "AFG", b),
            sicily,
            subunit("Siachen Glacier", "-99", "KAS", b),
        ]
    }

    #[test]
    fn test_buckets_preserve_store_order() {
        let index = IsoIndex::build(&sample(), &Iso3166, IntegrityPolicy::Strict).unwrap();
        assert_eq!(index.by_alpha2("IT"), &[0, 2]);
        assert_eq!(index.by_alpha3("ITA"), &[0, 2]);
        assert_eq!(index.by_alpha3("AFG"), &[1]);
        assert_eq!(index.unresolved(), &[3]);
        assert_eq!(index.alpha2_buckets().get(&None), Some(&vec![3]));
    }

    #[test]
    fn test_unknown_code_is_empty() {
        let index = IsoIndex::build(&sample(), &Iso3166, IntegrityPolicy::Strict).unwrap();
        assert!(index.by_alpha2("ZZ").is_empty());
        assert!(index.by_alpha3("LFQ").is_empty());
    }

    #[test]
    fn test_strict_policy_rejects_mismatch() {
        let mut subunits = sample();
        subunits.push(subunit("Broken", "FR", "DEU", Bbox::new(0.0, 0.0, 1.0, 1.0)));
        let err = IsoIndex::build(&subunits, &Iso3166, IntegrityPolicy::Strict).unwrap_err();
        assert!(matches!(err, IntegrityError::Alpha2Mismatch { .. }));
    }

    #[test]
    fn test_lenient_policy_uses_derived_code() {
        let mut subunits = sample();
        subunits.push(subunit("Broken", "FR", "DEU", Bbox::new(0.0, 0.0, 1.0, 1.0)));
        let index = IsoIndex::build(&subunits, &Iso3166, IntegrityPolicy::Lenient).unwrap();
        assert_eq!(index.by_alpha2("DE"), &[4]);
        assert!(index.by_alpha2("FR").is_empty());
    }
}
