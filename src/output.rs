//! Output formatting and persistence for rendered scenes and state summaries.
//!
//! Supports JSON logging, JSON (optionally gzip) scene files and CSV summaries.

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

use crate::join::summary::StateSummary;
use crate::render::Scene;

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a [`Scene`] as JSON to `path`, gzip-compressed when `gzip` is set.
pub fn write_scene(path: &str, scene: &Scene, gzip: bool) -> Result<()> {
    debug!(path, gzip, "Writing scene");
    let file = BufWriter::new(File::create(path)?);

    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        serde_json::to_writer(&mut encoder, scene)?;
        encoder.finish()?.flush()?;
    } else {
        let mut file = file;
        serde_json::to_writer(&mut file, scene)?;
        file.flush()?;
    }

    Ok(())
}

/// Writes one CSV row per state, with a header line.
pub fn write_summaries(path: &str, summaries: &[StateSummary]) -> Result<()> {
    debug!(path, rows = summaries.len(), "Writing state summaries");
    let mut writer = csv::Writer::from_path(path)?;

    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    Ok(())
}
