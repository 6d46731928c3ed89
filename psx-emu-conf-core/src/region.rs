/// Release regions of PlayStation software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// North America
    NtscU,
    /// Japan and Asia
    NtscJ,
    /// Europe and Oceania
    Pal,
}

/// All region variants, ordered by their string form.
const ALL_REGIONS: &[Region] = &[Region::NtscJ, Region::NtscU, Region::Pal];

impl Region {
    /// The canonical text form, as stored on an [`App`](crate::App).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NtscU => "NTSC-U",
            Self::NtscJ => "NTSC-J",
            Self::Pal => "PAL",
        }
    }

    /// All known regions.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionParseError(pub String);

impl std::fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown region: '{}'", self.0)
    }
}

impl std::error::Error for RegionParseError {}

impl std::str::FromStr for Region {
    type Err = RegionParseError;

    /// Parse the exact canonical form. Callers wanting leniency normalize first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_REGIONS
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}
