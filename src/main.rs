//! CLI entry point for the sighting map builder.
//!
//! Loads the state geography, the sighting sample and the state code lookup,
//! joins them, and either writes a render-ready scene or reports statistics.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sighting_map::{
    fetch::BasicClient,
    join::{highlight::busiest_cities, summary::summarize},
    output::{print_json, write_scene, write_summaries},
    pipeline::{Sources, fetch_all},
    render::{SceneRenderer, Style, render},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sighting_map")]
#[command(about = "Joins UFO sightings to US states for choropleth maps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Dataset locations; each falls back to its environment variable, then the default.
#[derive(Args)]
struct SourceArgs {
    /// GeoJSON feature collection of US states (path or URL) [env: MAP_SOURCE]
    #[arg(long)]
    map: Option<String>,

    /// Sightings CSV (path or URL) [env: SIGHTINGS_SOURCE]
    #[arg(long)]
    sightings: Option<String>,

    /// State name to abbreviation JSON (path or URL) [env: STATES_SOURCE]
    #[arg(long)]
    states: Option<String>,
}

impl SourceArgs {
    fn resolve(self) -> Sources {
        let env = Sources::from_env();
        Sources {
            map: self.map.unwrap_or(env.map),
            sightings: self.sightings.unwrap_or(env.sightings),
            states: self.states.unwrap_or(env.states),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Join the datasets and write the choropleth and marker layers as JSON
    Render {
        #[command(flatten)]
        sources: SourceArgs,

        /// File to write the scene to
        #[arg(short, long, default_value = "scene.json")]
        output: String,

        /// Gzip compress the scene file
        #[arg(long, default_value_t = false)]
        gzip: bool,

        /// Fill states without sightings red instead of the lightest color
        #[arg(long, default_value_t = false)]
        mark_empty: bool,
    },
    /// Log per-state sighting counts and mean durations
    Summary {
        #[command(flatten)]
        sources: SourceArgs,

        /// Optional: CSV file to write the summaries to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Log the cities with the most sightings
    Highlight {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/sighting_map.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sighting_map.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let client = BasicClient::new()?;

    match cli.command {
        Commands::Render {
            sources,
            output,
            gzip,
            mark_empty,
        } => {
            let datasets = fetch_all(&client, &sources.resolve()).await?;
            let joined = datasets.join();

            let style = Style {
                empty_fill: mark_empty.then(|| "red".to_string()),
                ..Style::default()
            };
            let mut renderer = SceneRenderer::new();
            render(&joined, &style, &mut renderer)?;

            write_scene(&output, &renderer.into_scene(), gzip)?;
            info!(
                output = %output,
                gzip,
                count_min = joined.count_domain.min,
                count_max = joined.count_domain.max,
                duration_min = joined.duration_domain.min,
                duration_max = joined.duration_domain.max,
                "Scene written"
            );
        }
        Commands::Summary { sources, csv } => {
            let datasets = fetch_all(&client, &sources.resolve()).await?;
            let joined = datasets.join();
            let summaries = summarize(&joined);

            for s in &summaries {
                info!(
                    state = %s.name,
                    code = s.code.as_deref().unwrap_or("-"),
                    sightings = %s.sightings_label(),
                    mean_duration_secs = s.mean_duration_seconds.round(),
                    "State"
                );
            }

            let unmatched = summaries.iter().filter(|s| s.code.is_none()).count();
            info!(
                states = summaries.len(),
                unmatched,
                us_sightings = joined.us_observations.len(),
                count_min = joined.count_domain.min,
                count_max = joined.count_domain.max,
                "Summary"
            );

            if let Some(path) = csv {
                write_summaries(&path, &summaries)?;
                info!(path = %path, "Summaries written");
            }
        }
        Commands::Highlight { sources } => {
            let datasets = fetch_all(&client, &sources.resolve()).await?;
            let joined = datasets.join();
            let cities = busiest_cities(&joined.us_observations);

            if cities.is_empty() {
                info!("No US sightings to highlight");
            }
            for city in &cities {
                info!(city = %city.city, sightings = city.count(), "Busiest city");
            }
            print_json(&cities)?;
        }
    }

    Ok(())
}
