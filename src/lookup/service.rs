//! Query engine over the adjusted subunit store.

use std::sync::OnceLock;

use tracing::debug;

use crate::dataset::{adjust, AdjustmentReport, BundledDataset, SubunitSource};
use crate::error::{IntegrityError, Result};
use crate::iso::{IntegrityPolicy, Iso3166, IsoIndex, IsoReference};
use crate::models::CountrySubunit;

/// Point and ISO-code lookups against country subunit bounding boxes.
///
/// The store is adjusted once on construction and never changes afterwards.
/// The ISO index is built on the first code query; concurrent first callers
/// block until that single build completes.
pub struct CountryBoxes {
    subunits: Vec<CountrySubunit>,
    report: AdjustmentReport,
    reference: Box<dyn IsoReference>,
    policy: IntegrityPolicy,
    index: OnceLock<std::result::Result<IsoIndex, IntegrityError>>,
}

impl CountryBoxes {
    /// Adjust `raw` and wrap it for querying
    pub fn new(
        raw: Vec<CountrySubunit>,
        reference: Box<dyn IsoReference>,
        policy: IntegrityPolicy,
    ) -> Self {
        let (subunits, report) = adjust(raw);
        Self {
            subunits,
            report,
            reference,
            policy,
            index: OnceLock::new(),
        }
    }

    pub fn from_source(
        source: &dyn SubunitSource,
        reference: Box<dyn IsoReference>,
        policy: IntegrityPolicy,
    ) -> Result<Self> {
        Ok(Self::new(source.load()?, reference, policy))
    }

    /// Bundled dataset with the ISO 3166 reference and strict integrity checks
    pub fn bundled() -> Result<Self> {
        Self::from_source(&BundledDataset, Box::new(Iso3166), IntegrityPolicy::Strict)
    }

    /// All subunits whose bounding box contains the point, in store order.
    ///
    /// Boxes over-select: a subunit matches even if its true shape does not
    /// cover the point.
    pub fn subunits_containing(&self, lon: f64, lat: f64) -> Vec<&CountrySubunit> {
        let found: Vec<&CountrySubunit> = self
            .subunits
            .iter()
            .filter(|s| s.bbox.contains(lon, lat))
            .collect();

        debug!("Point ({}, {}): {} subunits", lon, lat, found.len());
        found
    }

    /// Subunits for a case-insensitive alpha-2 or alpha-3 code.
    ///
    /// Codes of any other length and unknown codes give an empty result.
    /// Errors only when the dataset fails its integrity check.
    pub fn subunits_by_code(&self, code: &str) -> Result<Vec<&CountrySubunit>> {
        let code = code.to_uppercase();
        let positions = match code.chars().count() {
            2 => self.index()?.by_alpha2(&code),
            3 => self.index()?.by_alpha3(&code),
            _ => return Ok(Vec::new()),
        };

        Ok(self.resolve(positions))
    }

    /// Like [`Self::subunits_by_code`], with absent input giving no matches
    pub fn subunits_by_optional_code(&self, code: Option<&str>) -> Result<Vec<&CountrySubunit>> {
        match code {
            Some(code) => self.subunits_by_code(code),
            None => Ok(Vec::new()),
        }
    }

    /// The whole store in order; call again to restart
    pub fn all_subunits(&self) -> impl Iterator<Item = &CountrySubunit> + Clone + '_ {
        self.subunits.iter()
    }

    /// Alpha-3 buckets in code order, unresolved subunits first under `None`
    pub fn all_subunits_grouped_by_iso3(
        &self,
    ) -> Result<impl Iterator<Item = (Option<&str>, Vec<&CountrySubunit>)> + '_> {
        let index = self.index()?;
        Ok(index
            .alpha3_buckets()
            .iter()
            .map(|(code, positions)| (code.as_deref(), self.resolve(positions))))
    }

    /// Build the ISO index now and report any integrity violation
    pub fn verify(&self) -> Result<()> {
        self.index().map(|_| ())
    }

    pub fn adjustment_report(&self) -> AdjustmentReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.subunits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subunits.is_empty()
    }

    fn index(&self) -> Result<&IsoIndex> {
        let built = self.index.get_or_init(|| {
            IsoIndex::build(&self.subunits, self.reference.as_ref(), self.policy)
        });
        built.as_ref().map_err(|e| e.clone().into())
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&CountrySubunit> {
        positions.iter().map(|&pos| &self.subunits[pos]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::fixtures::subunit;
    use crate::models::Bbox;
    use std::sync::Arc;

    fn boxes() -> CountryBoxes {
        CountryBoxes::bundled().unwrap()
    }

    fn names(subunits: Vec<&CountrySubunit>) -> Vec<String> {
        let mut names: Vec<String> = subunits.into_iter().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    fn code_to_names(boxes: &CountryBoxes, code: &str) -> Vec<String> {
        names(boxes.subunits_by_code(code).unwrap())
    }

    fn point_to_names(boxes: &CountryBoxes, lon: f64, lat: f64) -> Vec<String> {
        names(boxes.subunits_containing(lon, lat))
    }

    #[test]
    fn test_codes() {
        let b = boxes();
        assert_eq!(code_to_names(&b, "AF"), vec!["Afghanistan"]);
        assert_eq!(code_to_names(&b, "AFG"), vec!["Afghanistan"]);
        assert_eq!(code_to_names(&b, "ZW"), vec!["Zimbabwe"]);
        assert_eq!(code_to_names(&b, "ZWE"), vec!["Zimbabwe"]);
    }

    #[test]
    fn test_codes_case() {
        let b = boxes();
        let italy = vec!["Italy", "Pantelleria", "Pelagie Islands", "Sardinia", "Sicily"];
        assert_eq!(code_to_names(&b, "IT"), italy);
        assert_eq!(code_to_names(&b, "it"), italy);
        assert_eq!(code_to_names(&b, "iTa"), italy);
        assert_eq!(code_to_names(&b, "Tm"), vec!["Turkmenistan"]);
        assert_eq!(code_to_names(&b, "Tkm"), vec!["Turkmenistan"]);
    }

    #[test]
    fn test_codes_missing() {
        let b = boxes();
        assert!(code_to_names(&b, "ZZ").is_empty());
        assert!(code_to_names(&b, "LFQ").is_empty());
    }

    #[test]
    fn test_codes_wrong_length_or_absent() {
        let b = boxes();
        for code in ["", "I", "ITAL", "-99", "  IT", "ÅÅÅÅ"] {
            assert!(code_to_names(&b, code).is_empty(), "{code}");
        }
        assert!(b.subunits_by_optional_code(None).unwrap().is_empty());
        assert_eq!(
            names(b.subunits_by_optional_code(Some("tm")).unwrap()),
            vec!["Turkmenistan"]
        );
    }

    #[test]
    fn test_alpha2_and_alpha3_agree_for_every_code() {
        let b = boxes();
        for entry in Iso3166.entries() {
            assert_eq!(
                code_to_names(&b, entry.alpha2),
                code_to_names(&b, entry.alpha3),
                "{} / {}",
                entry.alpha2,
                entry.alpha3
            );
        }
    }

    #[test]
    fn test_best_guess_fills_missing_codes() {
        let b = boxes();
        assert_eq!(code_to_names(&b, "SO"), vec!["Somalia", "Somaliland"]);
        assert_eq!(code_to_names(&b, "KZ"), vec!["Baikonur", "Kazakhstan"]);
        assert_eq!(
            code_to_names(&b, "CO"),
            vec![
                "Archipelago of San Andrés, Providencia and Santa Catalina",
                "Colombia"
            ]
        );
    }

    #[test]
    fn test_point() {
        let b = boxes();
        assert_eq!(
            point_to_names(&b, 27.5125, -21.173611),
            vec!["Botswana", "Zimbabwe"]
        );
        // the eastern half of Russia reaches the prime meridian
        assert_eq!(
            point_to_names(&b, 5.983333, 50.883333),
            vec!["France", "Germany", "Netherlands", "Russia"]
        );
        assert_eq!(
            point_to_names(&b, -171.714086, -75.185789),
            vec!["Antarctica"]
        );
        assert_eq!(point_to_names(&b, -79.888252, 32.819747), vec!["U.S.A."]);
    }

    #[test]
    fn test_point_on_either_side_of_antimeridian() {
        let b = boxes();
        assert_eq!(point_to_names(&b, -179.5, -16.5), vec!["Fiji"]);
        assert_eq!(point_to_names(&b, 178.0, -17.8), vec!["Fiji"]);
        assert_eq!(point_to_names(&b, 10.0, 60.0), vec!["Alaska", "Russia"]);
        assert_eq!(point_to_names(&b, -171.0, 65.0), vec!["Alaska", "Russia"]);
    }

    #[test]
    fn test_point_on_prime_meridian_matches_split_subunit_once() {
        let b = boxes();
        assert_eq!(point_to_names(&b, 0.0, -80.0), vec!["Antarctica"]);
        assert_eq!(point_to_names(&b, -0.0, -80.0), vec!["Antarctica"]);
        assert_eq!(point_to_names(&b, -0.5, -80.0), vec!["Antarctica"]);
    }

    #[test]
    fn test_point_after_corrections() {
        let b = boxes();
        assert!(point_to_names(&b, -16.33, 33.06).contains(&"Madeira".to_string()));
        assert_eq!(point_to_names(&b, 12.6, 35.5), vec!["Pelagie Islands"]);
        assert_eq!(point_to_names(&b, -5.35, 36.14), vec!["Gibraltar", "Spain"]);
        assert!(point_to_names(&b, -40.0, 30.0).is_empty());
        assert!(!point_to_names(&b, -68.93, 12.18).contains(&"Netherlands".to_string()));
    }

    #[test]
    fn test_point_query_is_order_stable() {
        let b = boxes();
        let first: Vec<*const CountrySubunit> = b
            .subunits_containing(179.2, -8.5)
            .into_iter()
            .map(|s| s as *const _)
            .collect();
        b.verify().unwrap();
        let second: Vec<*const CountrySubunit> = b
            .subunits_containing(179.2, -8.5)
            .into_iter()
            .map(|s| s as *const _)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_tuvalu() {
        let b = boxes();
        let tuvalu = b.subunits_by_code("TUV").unwrap();
        assert_eq!(tuvalu.len(), 1);
        assert_eq!(tuvalu[0].name, "Tuvalu");
        assert_eq!(tuvalu[0].bbox, Bbox::new(176.7, -12.7, 180.0, -5.4));
    }

    #[test]
    fn test_all_subunits_restartable() {
        let b = boxes();
        let iter = b.all_subunits();
        assert_eq!(iter.clone().count(), b.len());
        assert_eq!(b.all_subunits().count(), iter.count());
        assert_eq!(
            b.all_subunits().next().map(|s| s.name.as_str()),
            Some("Afghanistan")
        );
    }

    #[test]
    fn test_grouped_by_iso3_covers_store() {
        let b = boxes();
        let groups: Vec<_> = b.all_subunits_grouped_by_iso3().unwrap().collect();
        let total: usize = groups.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, b.len());

        let (code, unresolved) = &groups[0];
        assert_eq!(*code, None);
        assert_eq!(names(unresolved.clone()), vec!["Siachen Glacier"]);

        let italy = groups.iter().find(|(c, _)| *c == Some("ITA")).unwrap();
        assert_eq!(italy.1.len(), 5);
    }

    #[test]
    fn test_strict_integrity_violation_is_distinct() {
        let raw = vec![subunit("Broken", "FR", "DEU", Bbox::new(0.0, 0.0, 1.0, 1.0))];
        let b = CountryBoxes::new(raw, Box::new(Iso3166), IntegrityPolicy::Strict);

        assert_eq!(b.subunits_containing(0.5, 0.5).len(), 1);
        assert!(matches!(b.subunits_by_code("DE"), Err(Error::Integrity(_))));
        assert!(matches!(b.verify(), Err(Error::Integrity(_))));
        // wrong-length codes never touch the index
        assert!(b.subunits_by_code("DEUT").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_integrity_violation_is_indexed() {
        let raw = vec![subunit("Broken", "FR", "DEU", Bbox::new(0.0, 0.0, 1.0, 1.0))];
        let b = CountryBoxes::new(raw, Box::new(Iso3166), IntegrityPolicy::Lenient);
        assert_eq!(names(b.subunits_by_code("de").unwrap()), vec!["Broken"]);
        assert!(b.subunits_by_code("FR").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_first_queries() {
        let b = Arc::new(boxes());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let b = Arc::clone(&b);
                std::thread::spawn(move || code_to_names(&b, "IT"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 5);
        }
    }

    #[test]
    fn test_bundled_dataset_is_consistent() {
        boxes().verify().unwrap();
    }
}
