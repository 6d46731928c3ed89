use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_lib::{EffectiveSettings, Overrides};

use super::{ingest_files, load_settings, warn_disagreements};
use crate::error::CliError;

/// Ingest data files and report what would be dropped or conflicted.
pub(crate) fn run_check(data: Vec<PathBuf>) -> Result<(), CliError> {
    let overrides = Overrides {
        data,
        ..Default::default()
    };
    let effective = EffectiveSettings::resolve(&overrides, &load_settings());
    let ingested = ingest_files(&effective.data.value)?;

    if !ingested.rejected.is_empty() {
        log::info!("");
        log::info!("{}", "Rejected records:".if_supports_color(Stderr, |t| t.bold()));
        for rejected in &ingested.rejected {
            log::info!(
                "  {} {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                rejected,
            );
        }
    }

    if !ingested.disagreements.is_empty() {
        log::info!("");
        warn_disagreements(&ingested);
    }

    log::info!("");
    log::info!(
        "{} valid apps, {} rejected, {} disagreements",
        ingested.apps.len().if_supports_color(Stderr, |t| t.green()),
        ingested.rejected.len().if_supports_color(Stderr, |t| t.red()),
        ingested
            .disagreements
            .len()
            .if_supports_color(Stderr, |t| t.yellow()),
    );

    Ok(())
}
