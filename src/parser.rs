//! Decoders for the three input datasets.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::codes::StateCodes;
use crate::model::{FeatureCollection, Observation};

/// Decodes a GeoJSON `FeatureCollection`.
pub fn parse_features(bytes: &[u8]) -> Result<FeatureCollection> {
    serde_json::from_slice(bytes).context("invalid GeoJSON feature collection")
}

/// Decodes the state name to abbreviation JSON object.
pub fn parse_state_codes(bytes: &[u8]) -> Result<StateCodes> {
    serde_json::from_slice(bytes).context("invalid state code lookup")
}

/// Decodes sighting rows from CSV with a header line.
///
/// Dirty numeric cells are kept as NaN. Rows that still do not deserialize
/// (missing columns) are logged and skipped. A missing or unreadable header
/// is an error.
pub fn parse_observations(bytes: &[u8]) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(bytes);

    rdr.headers().context("invalid sightings CSV header")?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in rdr.deserialize::<Observation>().enumerate() {
        match result {
            Ok(obs) => rows.push(obs),
            Err(e) => {
                skipped += 1;
                warn!(row = i + 1, error = %e, "Skipping malformed sighting row");
            }
        }
    }

    debug!(rows = rows.len(), skipped, "Sightings parsed");
    Ok(rows)
}
