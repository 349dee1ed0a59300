//! Country subunit records as supplied by the dataset.

use serde::{Deserialize, Serialize};

use super::Bbox;

/// Value used by the dataset for "not applicable" code fields
pub const NOT_APPLICABLE: &str = "-99";

/// One subunit of the Natural Earth admin-0 map subunits layer.
///
/// Records are values: adjustments build a new record from an old one with
/// some fields overridden, they never mutate a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySubunit {
    pub bbox: Bbox,

    pub name: String,
    pub name_long: String,
    pub formal_en: String,
    pub subunit: String,
    pub admin: String,
    pub sovereignt: String,
    pub geounit: String,
    pub continent: String,
    pub region_un: String,
    pub subregion: String,
    pub pop_est: i64,
    pub gdp_md_est: f64,

    pub iso_a2: String,
    pub iso_a3: String,
    pub adm0_a3: String,
    pub adm0_a3_is: String,
    pub adm0_a3_us: String,
    pub gu_a3: String,
    pub su_a3: String,
    pub sov_a3: String,
}

impl CountrySubunit {
    /// Value of a code field, `None` when it holds the sentinel
    pub fn code(&self, field: CodeField) -> Option<&str> {
        let value = field.value(self);
        if value == NOT_APPLICABLE || value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Whether any descriptive text field equals `value` exactly
    pub fn has_text(&self, value: &str) -> bool {
        [
            &self.name,
            &self.name_long,
            &self.formal_en,
            &self.subunit,
            &self.admin,
            &self.sovereignt,
            &self.geounit,
        ]
        .iter()
        .any(|field| field.as_str() == value)
    }
}

/// Code-bearing fields of a [`CountrySubunit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeField {
    IsoA2,
    IsoA3,
    Adm0A3,
    Adm0A3Is,
    Adm0A3Us,
    GuA3,
    SuA3,
    SovA3,
}

impl CodeField {
    /// Raw field value, sentinel included
    pub fn value(self, subunit: &CountrySubunit) -> &str {
        match self {
            CodeField::IsoA2 => &subunit.iso_a2,
            CodeField::IsoA3 => &subunit.iso_a3,
            CodeField::Adm0A3 => &subunit.adm0_a3,
            CodeField::Adm0A3Is => &subunit.adm0_a3_is,
            CodeField::Adm0A3Us => &subunit.adm0_a3_us,
            CodeField::GuA3 => &subunit.gu_a3,
            CodeField::SuA3 => &subunit.su_a3,
            CodeField::SovA3 => &subunit.sov_a3,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal record for tests; every code field set to `code3`
    pub fn subunit(name: &str, code2: &str, code3: &str, bbox: Bbox) -> CountrySubunit {
        CountrySubunit {
            bbox,
            name: name.to_string(),
            name_long: name.to_string(),
            formal_en: name.to_string(),
            subunit: name.to_string(),
            admin: name.to_string(),
            sovereignt: name.to_string(),
            geounit: name.to_string(),
            continent: "Europe".to_string(),
            region_un: "Europe".to_string(),
            subregion: "Western Europe".to_string(),
            pop_est: 1000,
            gdp_md_est: 10.0,
            iso_a2: code2.to_string(),
            iso_a3: code3.to_string(),
            adm0_a3: code3.to_string(),
            adm0_a3_is: code3.to_string(),
            adm0_a3_us: code3.to_string(),
            gu_a3: code3.to_string(),
            su_a3: code3.to_string(),
            sov_a3: code3.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::subunit;
    use super::*;

    #[test]
    fn test_code_skips_sentinel() {
        let mut s = subunit("Sicily", "IT", "ITA", Bbox::new(12.4, 36.6, 15.7, 38.8));
        s.iso_a3 = NOT_APPLICABLE.to_string();
        assert_eq!(s.code(CodeField::IsoA3), None);
        assert_eq!(s.code(CodeField::Adm0A3), Some("ITA"));
    }

    #[test]
    fn test_has_text() {
        let mut s = subunit("Netherlands", "NL", "NLD", Bbox::new(3.3, 50.7, 7.2, 53.6));
        s.formal_en = "Kingdom of the Netherlands".to_string();
        assert!(s.has_text("Kingdom of the Netherlands"));
        assert!(!s.has_text("Kingdom"));
    }
}
