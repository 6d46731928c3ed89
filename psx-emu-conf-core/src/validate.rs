use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{App, Region};

/// Matches valid PlayStation software serial codes.
///
/// A valid serial code is 4 letters, a dash (`-`), then 5 digits, where:
///  - the 1st letter is always `S` for PlayStation titles
///  - the 2nd letter is `C` or `L`
///  - the 3rd letter is one of `A`, `C`, `E`, `K`, `P`, or `U`
///  - the 4th letter is one of `D`, `M`, `S`, `T`, or `X`
///
/// See: <https://serialstation.com/serials/guide/>
static SERIAL_CODE_PLAYSTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^S[CL][ACEKPU][DMSTX]-\d{5}$").expect("static pattern")
});

/// The first structural rule an [`App`] breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid region: '{0}'")]
    InvalidRegion(String),

    #[error("invalid serial code: '{0}'")]
    InvalidSerialCode(String),

    #[error("missing title")]
    MissingTitle,

    #[error("invalid analog-support level")]
    InvalidAnalogSupport,

    #[error("invalid rumble-support level")]
    InvalidRumbleSupport,
}

/// Whether a serial code has the PlayStation shape (see the pattern above).
pub fn is_playstation_serial(serial_code: &str) -> bool {
    SERIAL_CODE_PLAYSTATION.is_match(serial_code)
}

impl App {
    /// Check this app against the structural rules, in order, returning the
    /// first one that fails. Expects a normalized app; never modifies it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.region.parse::<Region>().is_err() {
            return Err(ValidationError::InvalidRegion(self.region.clone()));
        }

        if !self.serial_code.is_empty() && !is_playstation_serial(&self.serial_code) {
            return Err(ValidationError::InvalidSerialCode(self.serial_code.clone()));
        }

        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        if !self.feature_support.analog_support.is_known() {
            return Err(ValidationError::InvalidAnalogSupport);
        }

        if !self.feature_support.rumble_support.is_known() {
            return Err(ValidationError::InvalidRumbleSupport);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
