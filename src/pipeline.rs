//! Loading the three datasets that feed the join.

use anyhow::Result;
use tracing::{info, warn};

use crate::codes::StateCodes;
use crate::fetch::{HttpClient, read_source};
use crate::join::{JoinedData, augment};
use crate::model::{GeoFeature, Observation};
use crate::parser::{parse_features, parse_observations, parse_state_codes};

pub const DEFAULT_MAP_SOURCE: &str = "https://gist.githubusercontent.com/jrogerthat/13d202baa32e3f40935fd821a53a2473/raw/5b6e885727ccc290d0f62fa9c5fa69e81db6cf37/geojson-us.json";
pub const DEFAULT_SIGHTINGS_SOURCE: &str = "https://gist.githubusercontent.com/jrogerthat/d268681ca1aa08f1550b8fd128865eef/raw/af4dfd3b11040dc3f4296c9138b562445e969841/ufo-sample-data";
pub const DEFAULT_STATES_SOURCE: &str = "https://gist.githubusercontent.com/jrogerthat/f77b7c28dce15b893e0fe5cb6dd16d55/raw/f1a9e22ba1e777d6ed8b0d749b3fcc3118856cfe/state-dictionary.json";

/// Where each dataset lives: a local path or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub map: String,
    pub sightings: String,
    pub states: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            map: DEFAULT_MAP_SOURCE.to_string(),
            sightings: DEFAULT_SIGHTINGS_SOURCE.to_string(),
            states: DEFAULT_STATES_SOURCE.to_string(),
        }
    }
}

impl Sources {
    /// Defaults overridden by `MAP_SOURCE`, `SIGHTINGS_SOURCE` and `STATES_SOURCE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            map: lookup("MAP_SOURCE").unwrap_or(defaults.map),
            sightings: lookup("SIGHTINGS_SOURCE").unwrap_or(defaults.sightings),
            states: lookup("STATES_SOURCE").unwrap_or(defaults.states),
        }
    }
}

/// The three parsed inputs, owned. [`Datasets::join`] borrows from them.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub features: Vec<GeoFeature>,
    pub observations: Vec<Observation>,
    pub codes: StateCodes,
}

impl Datasets {
    pub fn join(&self) -> JoinedData<'_> {
        augment(&self.features, &self.observations, &self.codes)
    }
}

/// Fetches and parses all three datasets concurrently.
#[tracing::instrument(skip(client))]
pub async fn fetch_all<C: HttpClient + ?Sized>(client: &C, sources: &Sources) -> Result<Datasets> {
    let (map, sightings, states) = tokio::try_join!(
        read_source(client, &sources.map),
        read_source(client, &sources.sightings),
        read_source(client, &sources.states),
    )?;

    let features = parse_features(&map)?.features;
    let observations = parse_observations(&sightings)?;
    let codes = parse_state_codes(&states)?;
    if codes.is_empty() {
        warn!(source = %sources.states, "State code lookup is empty, no feature will match");
    }

    info!(
        features = features.len(),
        observations = observations.len(),
        codes = codes.len(),
        "Datasets loaded"
    );

    Ok(Datasets {
        features,
        observations,
        codes,
    })
}
