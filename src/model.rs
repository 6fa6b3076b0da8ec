//! Input records: sighting observations and GeoJSON state features.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single sighting row deserialized from the observations CSV.
///
/// Columns not listed here (`shape`, `date posted`, ...) are ignored.
/// Unparsable numeric cells become NaN; the row itself is kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Observation {
    pub country: String,
    pub state: String,
    pub city: String,
    pub datetime: String,
    #[serde(
        rename = "duration",
        alias = "duration (seconds)",
        deserialize_with = "lenient_f64"
    )]
    pub duration_seconds: f64,
    #[serde(rename = "duration (hours/min)", default)]
    pub duration_text: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub longitude: f64,
    #[serde(default)]
    pub comments: String,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(f64::NAN))
}

impl Observation {
    /// Country code used to keep only domestic sightings.
    pub const US: &'static str = "us";

    pub fn is_us(&self) -> bool {
        self.country == Self::US
    }

    /// True when both coordinates are usable for placing a marker.
    pub fn has_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// The join key: trimmed, lowercased state code.
    pub fn state_code(&self) -> String {
        self.state.trim().to_lowercase()
    }
}

/// One region of the geography file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeoFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl GeoFeature {
    /// Builds a geometry-less feature carrying only a `name` property.
    pub fn named(name: &str) -> Self {
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::String(name.to_string()));
        Self {
            kind: feature_type(),
            properties,
            geometry: Value::Null,
        }
    }

    /// Full region name, if the feature has a string `name` property.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}
