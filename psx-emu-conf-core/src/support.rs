//! Controller feature support levels.
//!
//! Levels are written to data files as small integers (`0` is always
//! "Unknown") and may be read back either as those integers or by name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a number or name doesn't denote a support level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupportLevelError {
    #[error("unknown {kind} level: {level}")]
    UnknownLevel { kind: &'static str, level: u64 },

    #[error("unknown {kind} level: '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

/// Wire form of a support level: either its number or its name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SupportLevelRepr {
    Level(u64),
    Name(String),
}

/// The level of support of an analog controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SupportLevelRepr", into = "u8")]
pub enum AnalogSupport {
    /// Unknown level of support.
    #[default]
    Unknown,
    /// No support. Digital only.
    No,
    /// Supports analog controllers.
    Yes,
    /// An analog controller is required.
    Required,
}

const ALL_ANALOG: &[AnalogSupport] = &[
    AnalogSupport::Unknown,
    AnalogSupport::No,
    AnalogSupport::Yes,
    AnalogSupport::Required,
];

impl AnalogSupport {
    const KIND: &'static str = "analog-support";

    pub fn all() -> &'static [AnalogSupport] {
        ALL_ANALOG
    }

    pub fn from_level(level: u64) -> Option<Self> {
        ALL_ANALOG.iter().copied().find(|s| u64::from(s.level()) == level)
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::No => 1,
            Self::Yes => 2,
            Self::Required => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::No => "No",
            Self::Yes => "Yes",
            Self::Required => "Required",
        }
    }

    /// Whether this is one of the named levels.
    pub fn is_known(&self) -> bool {
        ALL_ANALOG.contains(self)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::Unknown
    }
}

/// The level of support of the "rumble" (vibration) feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SupportLevelRepr", into = "u8")]
pub enum RumbleSupport {
    /// Unknown level of support.
    #[default]
    Unknown,
    /// No support.
    No,
    /// Supports rumble.
    Yes,
}

const ALL_RUMBLE: &[RumbleSupport] = &[
    RumbleSupport::Unknown,
    RumbleSupport::No,
    RumbleSupport::Yes,
];

impl RumbleSupport {
    const KIND: &'static str = "rumble-support";

    pub fn all() -> &'static [RumbleSupport] {
        ALL_RUMBLE
    }

    pub fn from_level(level: u64) -> Option<Self> {
        ALL_RUMBLE.iter().copied().find(|s| u64::from(s.level()) == level)
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::No => 1,
            Self::Yes => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    /// Whether this is one of the named levels.
    pub fn is_known(&self) -> bool {
        ALL_RUMBLE.contains(self)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::Unknown
    }
}

impl std::fmt::Display for AnalogSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for RumbleSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<AnalogSupport> for u8 {
    fn from(value: AnalogSupport) -> Self {
        value.level()
    }
}

impl From<RumbleSupport> for u8 {
    fn from(value: RumbleSupport) -> Self {
        value.level()
    }
}

impl std::str::FromStr for AnalogSupport {
    type Err = SupportLevelError;

    /// Parse a level number (`"2"`) or a case-insensitive name (`"yes"`).
    /// An empty string is `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s, Self::KIND, ALL_ANALOG, Self::name, Self::from_level)
    }
}

impl std::str::FromStr for RumbleSupport {
    type Err = SupportLevelError;

    /// Parse a level number (`"2"`) or a case-insensitive name (`"yes"`).
    /// An empty string is `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s, Self::KIND, ALL_RUMBLE, Self::name, Self::from_level)
    }
}

impl TryFrom<SupportLevelRepr> for AnalogSupport {
    type Error = SupportLevelError;

    fn try_from(repr: SupportLevelRepr) -> Result<Self, Self::Error> {
        match repr {
            SupportLevelRepr::Level(level) => {
                Self::from_level(level).ok_or(SupportLevelError::UnknownLevel {
                    kind: Self::KIND,
                    level,
                })
            }
            SupportLevelRepr::Name(name) => name.parse(),
        }
    }
}

impl TryFrom<SupportLevelRepr> for RumbleSupport {
    type Error = SupportLevelError;

    fn try_from(repr: SupportLevelRepr) -> Result<Self, Self::Error> {
        match repr {
            SupportLevelRepr::Level(level) => {
                Self::from_level(level).ok_or(SupportLevelError::UnknownLevel {
                    kind: Self::KIND,
                    level,
                })
            }
            SupportLevelRepr::Name(name) => name.parse(),
        }
    }
}

fn parse_level<T: Copy + Default>(
    s: &str,
    kind: &'static str,
    all: &[T],
    name: fn(&T) -> &'static str,
    from_level: fn(u64) -> Option<T>,
) -> Result<T, SupportLevelError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    if let Ok(level) = trimmed.parse::<u64>() {
        return from_level(level).ok_or(SupportLevelError::UnknownLevel { kind, level });
    }
    all.iter()
        .copied()
        .find(|level| name(level).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| SupportLevelError::UnknownName {
            kind,
            name: s.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/support_tests.rs"]
mod tests;
