//! Multi-source merge with disagreement detection.
//!
//! Collections are merged in trust order: the first collection is the
//! primary source, and a populated field is never overwritten by a later
//! one. Apps are matched by serial code; apps without one are passed
//! through unmerged since there is nothing stable to match them on.
//!
//! When two sources hold different populated values for the same field, the
//! primary value is kept and a [`Disagreement`] is recorded so the caller can
//! report it.

use std::collections::HashMap;

use psx_emu_conf_core::App;

/// A field on which two sources held different populated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub serial_code: String,
    pub field: &'static str,
    /// Value from the higher-trust source, which was kept.
    pub kept: String,
    /// Value from the lower-trust source, which was discarded.
    pub discarded: String,
}

impl std::fmt::Display for Disagreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: kept '{}', discarded '{}'",
            self.serial_code, self.field, self.kept, self.discarded
        )
    }
}

/// Output of merging collections.
#[derive(Debug, Clone, Default)]
pub struct MergeResult {
    /// Serial-coded apps in first-seen order, then apps without a serial code.
    pub apps: Vec<App>,
    pub disagreements: Vec<Disagreement>,
}

/// Merge `secondary` into `primary`, returning a new normalized app.
///
/// Scalar fields take the secondary value only where the primary is empty,
/// zero or Unknown. A non-empty secondary title that differs from the merged
/// title (the primary's, or the adopted one when the primary had none) is kept
/// as a title variation, and list fields are combined.
pub fn merge(primary: &App, secondary: &App) -> App {
    let mut merged = primary.clone();

    if merged.region.is_empty() {
        merged.region = secondary.region.clone();
    }
    if merged.serial_code.is_empty() {
        merged.serial_code = secondary.serial_code.clone();
    }
    if merged.title.is_empty() {
        merged.title = secondary.title.clone();
    }
    if merged.number_of_discs == 0 {
        merged.number_of_discs = secondary.number_of_discs;
    }

    let features = &mut merged.feature_support;
    if features.analog_support.is_unknown() {
        features.analog_support = secondary.feature_support.analog_support;
    }
    if features.rumble_support.is_unknown() {
        features.rumble_support = secondary.feature_support.rumble_support;
    }

    if !secondary.title.is_empty() && secondary.title != merged.title {
        merged.title_variations.push(secondary.title.clone());
    }
    merged
        .title_variations
        .extend(secondary.title_variations.iter().cloned());
    merged.disc_names.extend(secondary.disc_names.iter().cloned());

    merged.normalize();
    merged
}

/// List the fields on which `primary` and `secondary` hold different
/// populated values. Titles are not compared: a differing title becomes a
/// variation rather than a conflict.
pub fn find_disagreements(primary: &App, secondary: &App) -> Vec<Disagreement> {
    let mut found = Vec::new();
    let mut check_field = |field: &'static str, kept: String, discarded: String, empty: &str| {
        if kept == discarded || kept == empty || discarded == empty {
            return;
        }
        found.push(Disagreement {
            serial_code: primary.serial_code.clone(),
            field,
            kept,
            discarded,
        });
    };

    check_field(
        "Region",
        primary.region.clone(),
        secondary.region.clone(),
        "",
    );
    check_field(
        "NumberOfDiscs",
        primary.number_of_discs.to_string(),
        secondary.number_of_discs.to_string(),
        "0",
    );

    let (p, s) = (&primary.feature_support, &secondary.feature_support);
    check_field(
        "AnalogSupport",
        p.analog_support.to_string(),
        s.analog_support.to_string(),
        "Unknown",
    );
    check_field(
        "RumbleSupport",
        p.rumble_support.to_string(),
        s.rumble_support.to_string(),
        "Unknown",
    );

    found
}

/// Accumulates apps from any number of collections, in trust order.
#[derive(Debug, Default)]
pub struct Merger {
    keyed: Vec<App>,
    index: HashMap<String, usize>,
    unkeyed: Vec<App>,
    disagreements: Vec<Disagreement>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one app. Apps added earlier take precedence.
    pub fn add(&mut self, app: App) {
        if app.serial_code.is_empty() {
            self.unkeyed.push(app);
            return;
        }

        match self.index.get(&app.serial_code) {
            Some(&i) => {
                let existing = &self.keyed[i];
                let conflicts = find_disagreements(existing, &app);
                for conflict in &conflicts {
                    log::debug!("Merge disagreement on {conflict}");
                }
                self.disagreements.extend(conflicts);
                self.keyed[i] = merge(existing, &app);
            }
            None => {
                self.index.insert(app.serial_code.clone(), self.keyed.len());
                self.keyed.push(app);
            }
        }
    }

    /// Add every app of a collection, in order.
    pub fn add_collection(&mut self, apps: impl IntoIterator<Item = App>) {
        for app in apps {
            self.add(app);
        }
    }

    /// Number of apps the merged output will hold.
    pub fn len(&self) -> usize {
        self.keyed.len() + self.unkeyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finish(self) -> MergeResult {
        let mut apps = self.keyed;
        apps.extend(self.unkeyed);
        MergeResult {
            apps,
            disagreements: self.disagreements,
        }
    }
}

/// Merge collections given in trust order (first = highest trust).
pub fn merge_collections<I>(collections: I) -> MergeResult
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = App>,
{
    let mut merger = Merger::new();
    for collection in collections {
        merger.add_collection(collection);
    }
    merger.finish()
}
