use std::path::Path;

use psx_emu_conf_core::App;

use crate::{CsvFileSource, JsonFileSource, SourceError};

/// A producer of apps.
///
/// Sources hand back raw records: callers normalize and validate them.
pub trait Source {
    /// Human-readable name, used in log messages.
    fn name(&self) -> &str;

    /// Retrieve every app this source knows about.
    fn fetch(&self) -> Result<Vec<App>, SourceError>;
}

/// Pick a file source by extension: `.csv` files are read as CSV, anything
/// else (including `-` for stdin) as JSON.
pub fn source_for_path(path: &Path) -> Box<dyn Source> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Box::new(CsvFileSource::new(path))
    } else {
        Box::new(JsonFileSource::new(path))
    }
}
