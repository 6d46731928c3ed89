//! Writing configuration files for every (app, configurator, path) triple.
//!
//! Every triple is independent: a failure is recorded in the report and
//! generation moves on. Files that were partly written before a failure are
//! left as they are.

use std::path::{Path, PathBuf};

use psx_emu_conf_core::App;
use psx_emu_conf_emuconf::{
    Configurator, EmuConfError, PathKind, config_paths, join_under, render,
};

use crate::progress::GenerateProgress;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Resolve paths and render content without touching the filesystem.
    pub dry_run: bool,
}

/// A file written (or, in a dry run, that would have been written).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub core: &'static str,
    pub kind: PathKind,
    pub path: PathBuf,
}

/// A triple that could not be written.
#[derive(Debug)]
pub struct GenerateFailure {
    /// Label of the app (see [`App::label`]).
    pub app: String,
    pub core: &'static str,
    /// The relative path, when one was resolved.
    pub path: Option<String>,
    pub error: EmuConfError,
}

impl std::fmt::Display for GenerateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} [{}] {}: {}", self.app, self.core, path, self.error),
            None => write!(f, "{} [{}]: {}", self.app, self.core, self.error),
        }
    }
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<WrittenFile>,
    pub failures: Vec<GenerateFailure>,
    pub dry_run: bool,
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of alternative-path files among those written.
    pub fn alternatives_written(&self) -> usize {
        self.written
            .iter()
            .filter(|w| w.kind == PathKind::Alternative)
            .count()
    }
}

/// Write configuration for every app with every configurator, under `root`.
pub fn generate(
    apps: &[App],
    configurators: &[&dyn Configurator],
    root: &Path,
    options: &GenerateOptions,
    progress: &dyn GenerateProgress,
) -> GenerateReport {
    let mut report = GenerateReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    for (i, app) in apps.iter().enumerate() {
        for &configurator in configurators {
            generate_one(app, configurator, root, options, &mut report);
        }
        progress.on_app(i + 1, apps.len(), &app.label());
    }

    let verb = if options.dry_run { "Would write" } else { "Wrote" };
    progress.on_complete(&format!(
        "{verb} {} files for {} apps ({} failures)",
        report.written.len(),
        apps.len(),
        report.failures.len()
    ));

    report
}

fn generate_one(
    app: &App,
    configurator: &dyn Configurator,
    root: &Path,
    options: &GenerateOptions,
    report: &mut GenerateReport,
) {
    let core = configurator.short_name();
    let failure = |path: Option<String>, error: EmuConfError| GenerateFailure {
        app: app.label(),
        core,
        path,
        error,
    };

    let content = match render(configurator, app) {
        Ok(content) => content,
        Err(e) => {
            report.failures.push(failure(None, e.into()));
            return;
        }
    };

    for config_path in config_paths(configurator, app) {
        let relative = match config_path.resolved {
            Ok(relative) => relative,
            Err(e) => {
                log::debug!("No usable path for {} [{core}]: {e}", app.label());
                report.failures.push(failure(None, e.into()));
                continue;
            }
        };

        let path = join_under(root, &relative);
        if !options.dry_run {
            if let Err(e) = write_file(&path, &content) {
                report.failures.push(failure(Some(relative), e.into()));
                continue;
            }
        }

        log::debug!("{} [{core}] -> {}", app.label(), path.display());
        report.written.push(WrittenFile {
            core,
            kind: config_path.kind,
            path,
        });
    }
}

fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
