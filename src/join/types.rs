//! Data types produced by the join.

use serde::Serialize;

use crate::model::{GeoFeature, Observation};

/// Closed `[min, max]` range of a derived statistic, used as a scale domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialEq> Domain<T> {
    /// True when every value collapses onto a single point.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

impl Domain<usize> {
    pub fn as_f64(&self) -> Domain<f64> {
        Domain {
            min: self.min as f64,
            max: self.max as f64,
        }
    }
}

/// A geography feature together with the sightings that fall inside it.
#[derive(Debug, Clone, Serialize)]
pub struct JoinedFeature<'a> {
    pub feature: &'a GeoFeature,
    /// Lowercased join key, `None` when the name has no abbreviation.
    pub code: Option<String>,
    pub observations: Vec<&'a Observation>,
}

impl JoinedFeature<'_> {
    pub fn name(&self) -> Option<&str> {
        self.feature.name()
    }

    pub fn count(&self) -> usize {
        self.observations.len()
    }
}

/// Result of [`augment`](super::augment::augment): every feature with its
/// sightings, the US subset, and the two scale domains.
#[derive(Debug, Clone, Serialize)]
pub struct JoinedData<'a> {
    pub features: Vec<JoinedFeature<'a>>,
    pub us_observations: Vec<&'a Observation>,
    /// Per-feature sighting counts, for the choropleth color scale.
    pub count_domain: Domain<usize>,
    /// Sighting durations in seconds, for the marker radius scale.
    pub duration_domain: Domain<f64>,
}
