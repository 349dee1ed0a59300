//! Data providers for the subunit record store.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Bbox, CountrySubunit};

/// Dataset compiled into the crate, extracted from Natural Earth
/// `ne_50m_admin_0_map_subunits` (public domain).
const BUNDLED_CSV: &str = include_str!("../../data/subunits.csv");

/// Supplies the ordered subunit records at startup
pub trait SubunitSource {
    fn load(&self) -> Result<Vec<CountrySubunit>>;
}

/// The dataset shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

impl SubunitSource for BundledDataset {
    fn load(&self) -> Result<Vec<CountrySubunit>> {
        read_subunits(BUNDLED_CSV.as_bytes())
    }
}

/// A dataset CSV on disk using the bundled schema
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SubunitSource for CsvFile {
    fn load(&self) -> Result<Vec<CountrySubunit>> {
        info!("Loading subunits from {}", self.path.display());
        let file = File::open(&self.path)?;
        read_subunits(file)
    }
}

/// One CSV row; the box is stored as four flat columns
#[derive(Debug, Deserialize)]
struct SubunitRow {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    name: String,
    name_long: String,
    formal_en: String,
    subunit: String,
    admin: String,
    sovereignt: String,
    geounit: String,
    continent: String,
    region_un: String,
    subregion: String,
    pop_est: i64,
    gdp_md_est: f64,
    iso_a2: String,
    iso_a3: String,
    adm0_a3: String,
    adm0_a3_is: String,
    adm0_a3_us: String,
    gu_a3: String,
    su_a3: String,
    sov_a3: String,
}

impl SubunitRow {
    fn into_subunit(self, row: usize) -> Result<CountrySubunit> {
        let bbox = Bbox::new(self.min_lon, self.min_lat, self.max_lon, self.max_lat);
        let coords = [bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidRow {
                row,
                reason: format!("non-finite bbox {}", bbox),
            });
        }
        if bbox.min_lat > bbox.max_lat {
            return Err(Error::InvalidRow {
                row,
                reason: format!("inverted latitude range {}", bbox),
            });
        }
        // Shapes crossing the antimeridian must be written -180..180
        if bbox.min_lon > bbox.max_lon {
            return Err(Error::InvalidRow {
                row,
                reason: format!("inverted longitude range {}", bbox),
            });
        }

        Ok(CountrySubunit {
            bbox,
            name: self.name,
            name_long: self.name_long,
            formal_en: self.formal_en,
            subunit: self.subunit,
            admin: self.admin,
            sovereignt: self.sovereignt,
            geounit: self.geounit,
            continent: self.continent,
            region_un: self.region_un,
            subregion: self.subregion,
            pop_est: self.pop_est,
            gdp_md_est: self.gdp_md_est,
            iso_a2: self.iso_a2,
            iso_a3: self.iso_a3,
            adm0_a3: self.adm0_a3,
            adm0_a3_is: self.adm0_a3_is,
            adm0_a3_us: self.adm0_a3_us,
            gu_a3: self.gu_a3,
            su_a3: self.su_a3,
            sov_a3: self.sov_a3,
        })
    }
}

/// Parse subunit records from CSV with a header row
pub fn read_subunits<R: Read>(reader: R) -> Result<Vec<CountrySubunit>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut subunits = Vec::new();
    for (row, result) in csv_reader.deserialize::<SubunitRow>().enumerate() {
        subunits.push(result?.into_subunit(row + 1)?);
    }

    info!("Loaded {} subunits", subunits.len());
    Ok(subunits)
}
