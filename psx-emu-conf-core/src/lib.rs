//! PlayStation title records and the rules that keep them canonical.
//!
//! An [`App`] describes one PlayStation software title: where it was released,
//! its serial code, its title(s), its discs, and which controller features it
//! supports. This crate owns the record itself plus the pure, in-memory steps
//! applied to every record before it is used: normalization, validation and
//! default ordering.

use serde::{Deserialize, Serialize};

pub mod normalize;
pub mod region;
pub mod sort;
pub mod support;
pub mod validate;

pub use region::{Region, RegionParseError};
pub use sort::{compare_default, sort_default};
pub use support::{AnalogSupport, RumbleSupport, SupportLevelError};
pub use validate::ValidationError;

/// A PlayStation software title.
///
/// These are called "App" rather than "Game" so that non-game releases are
/// described the same way.
///
/// The serialized form uses PascalCase keys and omits empty fields, except for
/// `FeatureSupport` which is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct App {
    /// Release region as text (`NTSC-U`, `NTSC-J`, `PAL`), or empty when unknown.
    ///
    /// Kept as text so that unrecognized values survive until validation;
    /// see [`App::known_region`] for the typed view.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Serial code in `LLLL-DDDDD` form, or empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub serial_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Alternate titles seen for this app (deduplicated, sorted).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title_variations: Vec<String>,

    /// Number of discs; 0 means unknown or single-disc.
    #[serde(skip_serializing_if = "is_zero")]
    pub number_of_discs: u32,

    /// Disc labels (deduplicated, sorted).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disc_names: Vec<String>,

    pub feature_support: FeatureSupport,
}

/// The PlayStation features and peripherals support matrix of an [`App`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeatureSupport {
    pub analog_support: AnalogSupport,
    pub rumble_support: RumbleSupport,
}

impl FeatureSupport {
    /// True when an analog controller is supported or required.
    pub fn analog_capable(&self) -> bool {
        matches!(
            self.analog_support,
            AnalogSupport::Yes | AnalogSupport::Required
        )
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_serial_code(mut self, serial_code: impl Into<String>) -> Self {
        self.serial_code = serial_code.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_title_variation(mut self, variation: impl Into<String>) -> Self {
        self.title_variations.push(variation.into());
        self
    }

    pub fn with_discs(mut self, number_of_discs: u32) -> Self {
        self.number_of_discs = number_of_discs;
        self
    }

    pub fn with_disc_name(mut self, disc_name: impl Into<String>) -> Self {
        self.disc_names.push(disc_name.into());
        self
    }

    pub fn with_analog(mut self, analog: AnalogSupport) -> Self {
        self.feature_support.analog_support = analog;
        self
    }

    pub fn with_rumble(mut self, rumble: RumbleSupport) -> Self {
        self.feature_support.rumble_support = rumble;
        self
    }

    /// The region as a [`Region`], if it is one of the known values.
    pub fn known_region(&self) -> Option<Region> {
        self.region.parse().ok()
    }

    /// A short human-readable label for log messages: serial code and title
    /// when both exist, otherwise whichever is present.
    pub fn label(&self) -> String {
        match (self.serial_code.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} ({})", self.title, self.serial_code),
            (false, true) => self.serial_code.clone(),
            (true, false) => self.title.clone(),
            (true, true) => "<untitled>".to_string(),
        }
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
