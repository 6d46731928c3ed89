use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_import::{Echoj2Sheet, Source, source_for_path, write_apps};
use psx_emu_conf_lib::{EffectiveSettings, Overrides};

use super::{ingest_sources, load_settings, warn_disagreements};
use crate::error::CliError;

/// Source name selecting the Echoj2 spreadsheet.
const SHEET_SOURCE: &str = "sheet";

/// Fetch sources, merge them, and write the result as JSON.
pub(crate) fn run_fetch(
    output: Option<PathBuf>,
    sources: Vec<String>,
    api_key: Option<String>,
) -> Result<(), CliError> {
    let overrides = Overrides {
        google_api_key: api_key,
        ..Default::default()
    };
    let effective = EffectiveSettings::resolve(&overrides, &load_settings());

    let names = if sources.is_empty() {
        vec![SHEET_SOURCE.to_string()]
    } else {
        sources
    };
    let sources = names
        .iter()
        .map(|name| build_source(name, &effective))
        .collect::<Result<Vec<_>, _>>()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    spinner.set_message(format!("Fetching {} source(s)...", sources.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let ingested = ingest_sources(&sources);
    spinner.finish_and_clear();
    let ingested = ingested?;

    warn_disagreements(&ingested);
    if !ingested.rejected.is_empty() {
        log::warn!(
            "Skipped {} invalid records (run 'psx-emu-conf check' for details)",
            ingested.rejected.len()
        );
    }

    match &output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_apps(&mut writer, &ingested.apps)?;
            writer.flush()?;
            log::info!(
                "{} Wrote {} apps to {}",
                "\u{2714}".if_supports_color(Stderr, |t| t.green()),
                ingested.apps.len(),
                path.display().if_supports_color(Stderr, |t| t.cyan()),
            );
        }
        None => {
            write_apps(std::io::stdout().lock(), &ingested.apps)?;
        }
    }

    Ok(())
}

fn build_source(name: &str, effective: &EffectiveSettings) -> Result<Box<dyn Source>, CliError> {
    if !name.eq_ignore_ascii_case(SHEET_SOURCE) {
        return Ok(source_for_path(Path::new(name)));
    }

    let api_key = effective.google_api_key.value.clone().ok_or_else(|| {
        CliError::config(
            "the sheet source needs a Google API key \
             (use --api-key, set GOOGLE_API_KEY, or run 'psx-emu-conf config set-key')",
        )
    })?;
    Ok(Box::new(Echoj2Sheet::new(api_key)))
}
