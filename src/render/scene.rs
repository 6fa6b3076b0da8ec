use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ChoroplethLayer, MarkerLayer, Renderer};

/// Both layers of a rendered map, ready to hand to a drawing front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub generated_at: DateTime<Utc>,
    pub map: Option<ChoroplethLayer>,
    pub markers: Option<MarkerLayer>,
}

/// A [`Renderer`] that records the layers it is given into a [`Scene`].
#[derive(Debug)]
pub struct SceneRenderer {
    scene: Scene,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene {
                generated_at: Utc::now(),
                map: None,
                markers: None,
            },
        }
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SceneRenderer {
    fn draw_map(&mut self, layer: &ChoroplethLayer) -> Result<()> {
        self.scene.map = Some(layer.clone());
        Ok(())
    }

    fn draw_markers(&mut self, layer: &MarkerLayer) -> Result<()> {
        self.scene.markers = Some(layer.clone());
        Ok(())
    }
}
