//! The JSON data file: an array of apps in the interchange format.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use psx_emu_conf_core::App;

use crate::{Source, SourceError};

/// Reads apps from a JSON data file, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<String, SourceError> {
        let mut contents = String::new();
        let result = if self.path == Path::new("-") {
            std::io::stdin().read_to_string(&mut contents)
        } else {
            std::fs::File::open(&self.path).and_then(|mut f| f.read_to_string(&mut contents))
        };
        result.map_err(|e| SourceError::Io {
            path: self.name.clone(),
            source: e,
        })?;
        Ok(contents)
    }
}

impl Source for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<App>, SourceError> {
        let contents = self.read_contents()?;
        parse_apps(&contents).map_err(|e| SourceError::Json {
            path: self.name.clone(),
            source: e,
        })
    }
}

/// Parse a JSON array of apps.
///
/// The document must be an array; entries that don't decode as an app (for
/// example an unknown support level) are skipped with a warning rather than
/// failing the whole file.
pub fn parse_apps(contents: &str) -> Result<Vec<App>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    let mut apps = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<App>(entry) {
            Ok(app) => apps.push(app),
            Err(e) => log::warn!("Skipping malformed app at index {i}: {e}"),
        }
    }

    Ok(apps)
}

/// Write apps as a pretty-printed JSON array (2-space indent, trailing newline).
pub fn write_apps<W: Write>(mut writer: W, apps: &[App]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, apps)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
