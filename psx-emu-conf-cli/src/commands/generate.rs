use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_emuconf::Registry;
use psx_emu_conf_lib::{
    EffectiveSettings, GenerateOptions, GenerateProgress, LogProgress, Overrides, SilentProgress,
    generate,
};

use super::{ingest_files, load_settings, warn_disagreements};
use crate::error::CliError;

/// Progress bar over apps.
struct BarProgress(ProgressBar);

impl GenerateProgress for BarProgress {
    fn on_app(&self, current: usize, _total: usize, label: &str) {
        self.0.set_position(current as u64);
        self.0.set_message(label.to_string());
    }

    fn on_complete(&self, _message: &str) {
        self.0.finish_and_clear();
    }
}

/// Ingest data files and write configuration for the selected cores.
pub(crate) fn run_generate(
    data: Vec<PathBuf>,
    output: Option<PathBuf>,
    cores: Vec<String>,
    dry_run: bool,
    strict: bool,
    quiet: bool,
    verbose: bool,
) -> Result<(), CliError> {
    let overrides = Overrides {
        data,
        output,
        cores,
        ..Default::default()
    };
    let effective = EffectiveSettings::resolve(&overrides, &load_settings());

    let registry = Registry::retroarch();
    let selected = registry.select(&effective.cores.value)?;
    log::debug!(
        "Cores: {}",
        selected
            .iter()
            .map(|c| c.short_name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let ingested = ingest_files(&effective.data.value)?;
    warn_disagreements(&ingested);
    for rejected in &ingested.rejected {
        log::debug!("Skipping {rejected}");
    }

    // Verbose runs log progress instead of drawing a bar.
    let progress: Box<dyn GenerateProgress> = if quiet {
        Box::new(SilentProgress)
    } else if verbose {
        Box::new(LogProgress)
    } else {
        let pb = ProgressBar::new(ingested.apps.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}")
                .expect("static pattern"),
        );
        Box::new(BarProgress(pb))
    };

    let root = &effective.output.value;
    let options = GenerateOptions { dry_run };
    let report = generate(&ingested.apps, &selected, root, &options, progress.as_ref());

    if dry_run {
        for file in &report.written {
            log::info!("  {}", file.path.display());
        }
    }

    for failure in &report.failures {
        log::warn!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            failure,
        );
    }

    let verb = if dry_run { "Would write" } else { "Wrote" };
    log::info!(
        "{} {} {} files ({} alternatives) for {} apps under {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        verb,
        report.written.len(),
        report.alternatives_written(),
        ingested.apps.len(),
        root.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    if !ingested.rejected.is_empty() {
        log::info!(
            "  Skipped {} invalid records",
            ingested.rejected.len().if_supports_color(Stderr, |t| t.yellow()),
        );
    }
    if report.has_failures() {
        log::info!(
            "  Failed: {}",
            report.failures.len().if_supports_color(Stderr, |t| t.red()),
        );
        if strict {
            return Err(CliError::Failures(report.failures.len()));
        }
    }

    Ok(())
}
