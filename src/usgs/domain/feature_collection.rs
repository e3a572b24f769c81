use serde::Deserialize;

// API: https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php
// Features stay raw so a single malformed entry cannot fail the whole collection.
// Anything other than a `FeatureCollection` with a `features` array, such as an error object, fails to decode.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    FeatureCollection { features: Vec<serde_json::Value> },
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub id: Option<String>,
    pub geometry: Option<Geometry>,
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude, depth in km]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Milliseconds since the epoch.
    pub time: Option<i64>,
    pub url: Option<String>,
    pub alert: Option<String>,
    pub felt: Option<u64>,
    pub tsunami: Option<u8>,
}
