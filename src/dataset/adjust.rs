//! One-time corrections to the raw subunit dataset.
//!
//! The extracted Natural Earth boxes have a few known defects: islands that
//! fall outside their subunit's box, territories missing altogether, an
//! overseas kingdom whose box covers half the Atlantic, and shapes that wrap
//! the antimeridian and so report a world-wide box. Each correction matches
//! one record by an exact field value and either replaces it (same position)
//! or appends a record synthesized from it. A correction that matches nothing
//! is skipped.

use tracing::{debug, info};

use crate::models::{Bbox, CountrySubunit, NOT_APPLICABLE};

/// Result of applying one correction to its matched record
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    Replace(CountrySubunit),
    Append(CountrySubunit),
}

/// A hand-authored dataset correction
pub struct Correction {
    pub name: &'static str,
    pub matches: fn(&CountrySubunit) -> bool,
    pub apply: fn(&CountrySubunit) -> Adjustment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentReport {
    pub replaced: usize,
    pub appended: usize,
    pub split: usize,
    pub unmatched: usize,
}

/// Corrections in application order; no record matches more than one
pub const CORRECTIONS: &[Correction] = &[
    Correction {
        name: "Madeira covers Porto Santo",
        matches: |s| s.su_a3 == "PMD",
        apply: |s| {
            Adjustment::Replace(CountrySubunit {
                bbox: Bbox::new(-17.3, 32.4, -16.25, 33.15),
                ..s.clone()
            })
        },
    },
    Correction {
        name: "Pelagie Islands",
        matches: |s| s.subunit == "Pantelleria",
        apply: pelagie_islands,
    },
    Correction {
        name: "Tuvalu",
        matches: |s| s.subunit == "Kiribati",
        apply: tuvalu,
    },
    Correction {
        name: "San Andrés, Providencia and Santa Catalina",
        matches: |s| s.subunit == "Colombia",
        apply: san_andres,
    },
    Correction {
        name: "Gibraltar",
        matches: |s| s.subunit == "British Virgin Islands",
        apply: gibraltar,
    },
    Correction {
        name: "European Netherlands only",
        matches: |s| s.has_text("Kingdom of the Netherlands"),
        apply: |s| {
            Adjustment::Replace(CountrySubunit {
                bbox: Bbox::new(3.133, 50.750, 7.217, 53.683),
                ..s.clone()
            })
        },
    },
];

fn pelagie_islands(pantelleria: &CountrySubunit) -> Adjustment {
    let name = "Pelagie Islands".to_string();
    Adjustment::Append(CountrySubunit {
        bbox: Bbox::new(12.315, 35.487, 12.893, 35.885),
        name: name.clone(),
        name_long: name.clone(),
        subunit: name.clone(),
        geounit: name,
        pop_est: 6066,
        gdp_md_est: 136.0,
        // adm0_a3 stays ITA so the islands index under IT/ITA
        gu_a3: "IAG".to_string(),
        su_a3: "IAG".to_string(),
        ..pantelleria.clone()
    })
}

fn tuvalu(kiribati: &CountrySubunit) -> Adjustment {
    let name = "Tuvalu".to_string();
    let code = "TUV".to_string();
    Adjustment::Append(CountrySubunit {
        bbox: Bbox::new(176.7, -12.7, 180.0, -5.4),
        name: name.clone(),
        name_long: name.clone(),
        formal_en: name.clone(),
        subunit: name.clone(),
        admin: name.clone(),
        sovereignt: name.clone(),
        geounit: name,
        continent: "Oceania".to_string(),
        region_un: "Oceania".to_string(),
        subregion: "Polynesia".to_string(),
        pop_est: 10472,
        gdp_md_est: 39.0,
        iso_a2: "TV".to_string(),
        iso_a3: code.clone(),
        adm0_a3: code.clone(),
        adm0_a3_is: code.clone(),
        adm0_a3_us: code.clone(),
        gu_a3: code.clone(),
        su_a3: code.clone(),
        sov_a3: code,
        ..kiribati.clone()
    })
}

fn san_andres(colombia: &CountrySubunit) -> Adjustment {
    let name = "Archipelago of San Andrés, Providencia and Santa Catalina".to_string();
    Adjustment::Append(CountrySubunit {
        bbox: Bbox::new(-82.39, 11.16, -79.60, 15.33),
        name: name.clone(),
        name_long: name.clone(),
        formal_en: name.clone(),
        subunit: name.clone(),
        geounit: name,
        pop_est: 75167,
        gdp_md_est: 1125.0,
        iso_a2: NOT_APPLICABLE.to_string(),
        iso_a3: NOT_APPLICABLE.to_string(),
        ..colombia.clone()
    })
}

fn gibraltar(british_virgin_islands: &CountrySubunit) -> Adjustment {
    let name = "Gibraltar".to_string();
    let code = "GIB".to_string();
    Adjustment::Append(CountrySubunit {
        bbox: Bbox::new(-5.368, 36.108618, -5.336, 36.155),
        name: name.clone(),
        name_long: name.clone(),
        formal_en: name.clone(),
        subunit: name.clone(),
        admin: name.clone(),
        geounit: name,
        sovereignt: "United Kingdom".to_string(),
        continent: "Europe".to_string(),
        region_un: "Europe".to_string(),
        subregion: "Southern Europe".to_string(),
        pop_est: 29441,
        gdp_md_est: 1106.0,
        iso_a2: "GI".to_string(),
        iso_a3: code.clone(),
        adm0_a3: code.clone(),
        adm0_a3_is: code.clone(),
        adm0_a3_us: code.clone(),
        gu_a3: code.clone(),
        su_a3: code,
        ..british_virgin_islands.clone()
    })
}

/// Split a box wrapping the antimeridian at the prime meridian.
///
/// The eastern part covers `[0, 180]` and the western part `[-180, 0)`; the
/// western edge stops at the largest float below zero so a point on the
/// prime meridian falls in exactly one part.
pub fn split_at_antimeridian(subunit: &CountrySubunit) -> (CountrySubunit, CountrySubunit) {
    let b = subunit.bbox;
    let east = CountrySubunit {
        bbox: Bbox::new(0.0, b.min_lat, 180.0, b.max_lat),
        ..subunit.clone()
    };
    let west = CountrySubunit {
        bbox: Bbox::new(-180.0, b.min_lat, -f64::from_bits(1), b.max_lat),
        ..subunit.clone()
    };
    (east, west)
}

/// Apply every correction once, then split antimeridian-wrapping boxes.
///
/// Replacements keep their position; synthesized and western split records
/// are appended in rule order.
pub fn adjust(mut subunits: Vec<CountrySubunit>) -> (Vec<CountrySubunit>, AdjustmentReport) {
    let mut report = AdjustmentReport::default();

    for correction in CORRECTIONS {
        let Some(pos) = subunits.iter().position(correction.matches) else {
            debug!("Correction '{}' matched no subunit", correction.name);
            report.unmatched += 1;
            continue;
        };

        match (correction.apply)(&subunits[pos]) {
            Adjustment::Replace(subunit) => {
                debug!("Correction '{}' replaced '{}'", correction.name, subunit.name);
                subunits[pos] = subunit;
                report.replaced += 1;
            }
            Adjustment::Append(subunit) => {
                debug!("Correction '{}' appended '{}'", correction.name, subunit.name);
                subunits.push(subunit);
                report.appended += 1;
            }
        }
    }

    let mut western = Vec::new();
    for subunit in subunits.iter_mut() {
        if subunit.bbox.spans_antimeridian() {
            let (east, west) = split_at_antimeridian(subunit);
            debug!(
                "Split '{}' at the antimeridian into {} and {}",
                subunit.name, east.bbox, west.bbox
            );
            *subunit = east;
            western.push(west);
        }
    }
    report.split = western.len();
    subunits.extend(western);

    info!(
        "Adjusted dataset: {} replaced, {} appended, {} split, {} corrections unmatched",
        report.replaced, report.appended, report.split, report.unmatched
    );

    (subunits, report)
}
