//! Scale binding and the [`Renderer`] capability.
//!
//! [`render`] turns a [`JoinedData`] into a choropleth layer (one fill per
//! feature) and a marker layer (one circle per US sighting), then hands both
//! to a [`Renderer`]. Drawing itself is left to the implementation.

mod scene;

pub use scene::{Scene, SceneRenderer};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::join::{Domain, JoinedData};
use crate::scale::{LinearScale, QuantizeScale};

/// Default marker fill.
pub const MARKER_FILL: &str = "#01FB86";

/// Presentation choices that vary between map variants.
#[derive(Debug, Clone)]
pub struct Style {
    pub palette: Vec<String>,
    /// When set, states with no sightings use this fill instead of the palette.
    pub empty_fill: Option<String>,
    pub marker_fill: String,
    pub radius_range: (f64, f64),
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: crate::scale::PALETTE.iter().map(|c| c.to_string()).collect(),
            empty_fill: None,
            marker_fill: MARKER_FILL.to_string(),
            radius_range: crate::scale::RADIUS_RANGE,
        }
    }
}

/// Fill for one geography feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionFill {
    pub name: Option<String>,
    pub code: Option<String>,
    pub sightings: usize,
    pub fill: Option<String>,
    pub geometry: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethLayer {
    pub domain: Domain<usize>,
    pub regions: Vec<RegionFill>,
}

/// Circle for one sighting, positioned in lon/lat, with its tooltip details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
    pub fill: String,
    pub city: String,
    pub datetime: String,
    pub duration_text: Option<String>,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub domain: Domain<f64>,
    pub markers: Vec<Marker>,
}

/// Something that can draw the two map layers.
pub trait Renderer {
    fn draw_map(&mut self, layer: &ChoroplethLayer) -> Result<()>;
    fn draw_markers(&mut self, layer: &MarkerLayer) -> Result<()>;
}

/// Builds the choropleth layer: palette bucket by sighting count.
pub fn choropleth_layer(joined: &JoinedData, style: &Style) -> ChoroplethLayer {
    let color = QuantizeScale::new(joined.count_domain.as_f64(), style.palette.clone());

    let regions = joined
        .features
        .iter()
        .map(|f| {
            let fill = match (&style.empty_fill, f.count()) {
                (Some(empty), 0) => Some(empty.clone()),
                _ => color.apply(f.count() as f64).map(str::to_string),
            };
            RegionFill {
                name: f.name().map(str::to_string),
                code: f.code.clone(),
                sightings: f.count(),
                fill,
                geometry: f.feature.geometry.clone(),
            }
        })
        .collect();

    ChoroplethLayer {
        domain: joined.count_domain,
        regions,
    }
}

/// Builds the marker layer: radius by sighting duration. Sightings without
/// usable coordinates get no marker.
pub fn marker_layer(joined: &JoinedData, style: &Style) -> MarkerLayer {
    let radius = LinearScale::new(joined.duration_domain, style.radius_range);

    let markers = joined
        .us_observations
        .iter()
        .filter(|o| o.has_position())
        .map(|o| Marker {
            longitude: o.longitude,
            latitude: o.latitude,
            radius: radius.apply(o.duration_seconds),
            fill: style.marker_fill.clone(),
            city: o.city.clone(),
            datetime: o.datetime.clone(),
            duration_text: o.duration_text.clone(),
            comments: o.comments.clone(),
        })
        .collect();

    MarkerLayer {
        domain: joined.duration_domain,
        markers,
    }
}

/// Binds scales to the joined data and draws both layers, map first.
pub fn render<R: Renderer + ?Sized>(joined: &JoinedData, style: &Style, renderer: &mut R) -> Result<()> {
    let map = choropleth_layer(joined, style);
    debug!(regions = map.regions.len(), "Drawing map layer");
    renderer.draw_map(&map)?;

    let markers = marker_layer(joined, style);
    debug!(markers = markers.markers.len(), "Drawing marker layer");
    renderer.draw_markers(&markers)?;

    Ok(())
}
