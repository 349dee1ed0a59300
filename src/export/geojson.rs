//! GeoJSON rendering of subunit bounding boxes, for eyeballing the dataset
//! in a map viewer.

use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::CountrySubunit;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub geo_type: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub geo_type: &'static str,
    pub geometry: PolygonGeometry,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub geo_type: &'static str,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Feature {
    /// Polygon feature for a subunit's box; properties are left empty
    pub fn from_subunit(subunit: &CountrySubunit) -> Self {
        let ring = subunit
            .bbox
            .to_polygon()
            .exterior()
            .coords()
            .map(|c| [c.x, c.y])
            .collect();

        Self {
            geo_type: "Feature",
            geometry: PolygonGeometry {
                geo_type: "Polygon",
                coordinates: vec![ring],
            },
            properties: Map::new(),
        }
    }
}

pub fn feature_collection<'a, I>(subunits: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a CountrySubunit>,
{
    FeatureCollection {
        geo_type: "FeatureCollection",
        features: subunits.into_iter().map(Feature::from_subunit).collect(),
    }
}

/// Write one Polygon feature per subunit box as a FeatureCollection
pub fn write_feature_collection<'a, I, W>(subunits: I, mut sink: W) -> Result<()>
where
    I: IntoIterator<Item = &'a CountrySubunit>,
    W: Write,
{
    serde_json::to_writer_pretty(&mut sink, &feature_collection(subunits))?;
    writeln!(sink)?;
    Ok(())
}
