//! User settings: the settings file, environment overrides, and how both
//! combine with command-line flags.
//!
//! The settings file lives at `~/.config/psx-emu-conf/settings.toml` (or the
//! platform equivalent):
//!
//! ```toml
//! [paths]
//! data = "_data/data.json"
//! output = "_configs"
//!
//! [cores]
//! enabled = ["pcsx_rearmed", "beetle_psx"]
//!
//! [sources]
//! google_api_key = "..."
//! ```
//!
//! Each value is taken from the first place that sets it: command line,
//! environment, settings file, built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::SettingsError;

/// Environment variable holding the Google API key.
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Environment variable holding the data file path(s), separated like `PATH`.
pub const ENV_DATA: &str = "PSX_EMU_CONF_DATA";
/// Environment variable holding the output directory.
pub const ENV_OUTPUT: &str = "PSX_EMU_CONF_OUTPUT";

pub const DEFAULT_DATA: &str = "_data/data.json";
pub const DEFAULT_OUTPUT: &str = "_configs";

/// Canonical path to the settings file: `~/.config/psx-emu-conf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("psx-emu-conf").join("settings.toml")
}

/// Contents of the settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub cores: CoreSettings,
    pub sources: SourceSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreSettings {
    /// Short names of the cores to generate for; empty means all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,
}

impl Settings {
    /// Load the settings file from its canonical location.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(SettingsError::io(path, e)),
        };

        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Save the Google API key in the settings file at `path`.
///
/// Uses `toml::Value` for a surgical update so other settings, including
/// ones this version doesn't know about, are preserved.
pub fn save_api_key(path: &Path, api_key: &str) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse().map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(SettingsError::io(path, e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::malformed(path, "root is not a table"))?;
    let sources = table
        .entry("sources")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| SettingsError::malformed(path, "[sources] is not a table"))?;
    sources.insert(
        "google_api_key".to_string(),
        toml::Value::String(api_key.to_string()),
    );

    write_atomic(path, &toml::to_string_pretty(&doc)?)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents).map_err(|e| SettingsError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| SettingsError::io(path, e))
}

/// Where an effective setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    CommandLine,
    Environment(&'static str),
    SettingsFile,
    Default,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => f.write_str("command line"),
            Self::Environment(var) => write!(f, "environment ({var})"),
            Self::SettingsFile => f.write_str("settings file"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// A setting's value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    fn new(value: T, origin: Origin) -> Self {
        Self { value, origin }
    }
}

/// Values given on the command line. Empty or `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub cores: Vec<String>,
    pub google_api_key: Option<String>,
}

/// The settings in effect after combining every layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    /// Data files, first = highest trust.
    pub data: Resolved<Vec<PathBuf>>,
    pub output: Resolved<PathBuf>,
    /// Selected core names; empty means all registered cores.
    pub cores: Resolved<Vec<String>>,
    pub google_api_key: Resolved<Option<String>>,
}

impl EffectiveSettings {
    /// Combine command-line values, the process environment and `settings`.
    pub fn resolve(overrides: &Overrides, settings: &Settings) -> Self {
        Self::resolve_with(overrides, settings, |var| std::env::var(var).ok())
    }

    /// As [`resolve`](Self::resolve), reading the environment through `env`.
    pub fn resolve_with(
        overrides: &Overrides,
        settings: &Settings,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env = |var: &str| env(var).filter(|value| !value.trim().is_empty());

        let data = if !overrides.data.is_empty() {
            Resolved::new(overrides.data.clone(), Origin::CommandLine)
        } else if let Some(value) = env(ENV_DATA) {
            let paths = std::env::split_paths(&value).collect();
            Resolved::new(paths, Origin::Environment(ENV_DATA))
        } else if let Some(path) = &settings.paths.data {
            Resolved::new(vec![path.clone()], Origin::SettingsFile)
        } else {
            Resolved::new(vec![PathBuf::from(DEFAULT_DATA)], Origin::Default)
        };

        let output = if let Some(path) = &overrides.output {
            Resolved::new(path.clone(), Origin::CommandLine)
        } else if let Some(value) = env(ENV_OUTPUT) {
            Resolved::new(PathBuf::from(value), Origin::Environment(ENV_OUTPUT))
        } else if let Some(path) = &settings.paths.output {
            Resolved::new(path.clone(), Origin::SettingsFile)
        } else {
            Resolved::new(PathBuf::from(DEFAULT_OUTPUT), Origin::Default)
        };

        let cores = if !overrides.cores.is_empty() {
            Resolved::new(overrides.cores.clone(), Origin::CommandLine)
        } else if !settings.cores.enabled.is_empty() {
            Resolved::new(settings.cores.enabled.clone(), Origin::SettingsFile)
        } else {
            Resolved::new(Vec::new(), Origin::Default)
        };

        let google_api_key = if let Some(key) = overrides.google_api_key.clone() {
            Resolved::new(Some(key), Origin::CommandLine)
        } else if let Some(key) = env(ENV_GOOGLE_API_KEY) {
            Resolved::new(Some(key), Origin::Environment(ENV_GOOGLE_API_KEY))
        } else if let Some(key) = settings.sources.google_api_key.clone() {
            Resolved::new(Some(key), Origin::SettingsFile)
        } else {
            Resolved::new(None, Origin::Default)
        };

        Self {
            data,
            output,
            cores,
            google_api_key,
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
