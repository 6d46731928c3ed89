//! Normalize, merge, validate and sort app collections.

use std::collections::HashMap;

use psx_emu_conf_core::{App, ValidationError, sort_default};
use psx_emu_conf_import::{Disagreement, Merger, Source, SourceError};

/// A merged record dropped by validation.
#[derive(Debug, Clone)]
pub struct Rejected {
    /// Names of the sources that contributed to the record, in trust order.
    pub sources: Vec<String>,
    /// The record after normalization and merging.
    pub app: App,
    pub error: ValidationError,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.sources.join(", "),
            self.app.label(),
            self.error
        )
    }
}

/// Output of [`ingest`].
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Valid, merged apps in default order.
    pub apps: Vec<App>,
    pub rejected: Vec<Rejected>,
    pub disagreements: Vec<Disagreement>,
}

/// Run the pipeline over named collections given in trust order (first =
/// highest trust).
///
/// Records are normalized and merged across collections first, so a
/// lower-trust record can fill gaps in a higher-trust one. Each merged record
/// is then validated; invalid ones are set aside in [`Ingested::rejected`]
/// and the rest are sorted.
pub fn ingest<I, S>(collections: I) -> Ingested
where
    I: IntoIterator<Item = (S, Vec<App>)>,
    S: Into<String>,
{
    let mut merger = Merger::new();
    // Contributing sources of each serial-coded record, and the source of
    // each unkeyed one in arrival order.
    let mut keyed_sources: HashMap<String, Vec<String>> = HashMap::new();
    let mut unkeyed_sources: Vec<String> = Vec::new();

    for (source, apps) in collections {
        let source = source.into();
        log::debug!("{source}: {} records", apps.len());

        for mut app in apps {
            app.normalize();
            if app.serial_code.is_empty() {
                unkeyed_sources.push(source.clone());
            } else {
                let sources = keyed_sources.entry(app.serial_code.clone()).or_default();
                if !sources.contains(&source) {
                    sources.push(source.clone());
                }
            }
            merger.add(app);
        }
    }

    let merged = merger.finish();
    let mut unkeyed_sources = unkeyed_sources.into_iter();
    let mut apps = Vec::with_capacity(merged.apps.len());
    let mut rejected = Vec::new();

    for app in merged.apps {
        let sources = if app.serial_code.is_empty() {
            unkeyed_sources.next().into_iter().collect()
        } else {
            keyed_sources.remove(&app.serial_code).unwrap_or_default()
        };

        match app.validate() {
            Ok(()) => apps.push(app),
            Err(error) => {
                log::debug!("Rejected {} from {}: {error}", app.label(), sources.join(", "));
                rejected.push(Rejected {
                    sources,
                    app,
                    error,
                });
            }
        }
    }

    sort_default(&mut apps);

    Ingested {
        apps,
        rejected,
        disagreements: merged.disagreements,
    }
}

/// Fetch every source in order. Any source failing to load is fatal.
pub fn fetch_all(sources: &[Box<dyn Source>]) -> Result<Vec<(String, Vec<App>)>, SourceError> {
    sources
        .iter()
        .map(|source| {
            let apps = source.fetch()?;
            log::debug!("Fetched {} records from {}", apps.len(), source.name());
            Ok((source.name().to_string(), apps))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
