pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod cores;
pub(crate) mod fetch;
pub(crate) mod generate;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_import::{Source, source_for_path};
use psx_emu_conf_lib::{Ingested, Settings, fetch_all, ingest};

use crate::error::CliError;

/// Load the settings file, falling back to defaults when it can't be read.
pub(crate) fn load_settings() -> Settings {
    Settings::load().unwrap_or_else(|e| {
        log::warn!("Ignoring settings file: {e}");
        Settings::default()
    })
}

/// Read data files in trust order and run them through the ingest pipeline.
pub(crate) fn ingest_files(paths: &[PathBuf]) -> Result<Ingested, CliError> {
    let sources: Vec<Box<dyn Source>> = paths.iter().map(|p| source_for_path(p)).collect();
    ingest_sources(&sources)
}

pub(crate) fn ingest_sources(sources: &[Box<dyn Source>]) -> Result<Ingested, CliError> {
    let collections = fetch_all(sources)?;
    for (name, apps) in &collections {
        log::info!(
            "Read {} records from {}",
            apps.len(),
            name.if_supports_color(Stderr, |t| t.cyan()),
        );
    }
    Ok(ingest(collections))
}

/// Log merge disagreements as warnings.
pub(crate) fn warn_disagreements(ingested: &Ingested) {
    for disagreement in &ingested.disagreements {
        log::warn!(
            "{} Sources disagree on {}",
            "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
            disagreement,
        );
    }
}
