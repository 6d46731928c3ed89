//! CSV data files.
//!
//! The header row names interchange fields; columns may appear in any order
//! and any of them may be missing:
//!
//! ```text
//! Region,SerialCode,Title,TitleVariations,NumberOfDiscs,DiscNames,AnalogSupport,RumbleSupport
//! NTSC-U,SCUS-94900,Crash Bandicoot,,1,,No,No
//! PAL,SCES-01564,Ape Escape,Ape Escape (EU);Ape Escape Platinum,1,,Required,Yes
//! ```
//!
//! List fields are `;`-separated. Support levels accept numbers or names.

use std::path::{Path, PathBuf};

use psx_emu_conf_core::App;

use crate::{Source, SourceError};

const LIST_SEPARATOR: char = ';';

/// Reads apps from a CSV data file.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<App>, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.name.clone(),
            source: e,
        })?;
        parse_csv(&contents).map_err(|e| SourceError::Csv {
            path: self.name.clone(),
            source: e,
        })
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    region: Option<usize>,
    serial_code: Option<usize>,
    title: Option<usize>,
    title_variations: Option<usize>,
    number_of_discs: Option<usize>,
    disc_names: Option<usize>,
    analog_support: Option<usize>,
    rumble_support: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Self::default();
        for (i, header) in headers.iter().enumerate() {
            let slot = match header.trim().to_ascii_lowercase().as_str() {
                "region" => &mut columns.region,
                "serialcode" => &mut columns.serial_code,
                "title" => &mut columns.title,
                "titlevariations" => &mut columns.title_variations,
                "numberofdiscs" => &mut columns.number_of_discs,
                "discnames" => &mut columns.disc_names,
                "analogsupport" => &mut columns.analog_support,
                "rumblesupport" => &mut columns.rumble_support,
                other => {
                    log::debug!("Ignoring unknown CSV column '{other}'");
                    continue;
                }
            };
            slot.get_or_insert(i);
        }
        columns
    }
}

/// Parse CSV content into apps. Rows with unreadable values are skipped
/// with a warning.
pub fn parse_csv(content: &str) -> Result<Vec<App>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(content.as_bytes());

    let columns = Columns::from_headers(reader.headers()?);
    let mut apps = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed CSV row {}: {e}", i + 1);
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(app) => apps.push(app),
            Err(msg) => log::warn!("Skipping CSV row {}: {msg}", i + 1),
        }
    }

    Ok(apps)
}

fn parse_row(record: &csv::StringRecord, columns: &Columns) -> Result<App, String> {
    let get = |column: Option<usize>| column.and_then(|i| record.get(i)).unwrap_or("");
    let list = |column: Option<usize>| -> Vec<String> {
        get(column)
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    };

    let number_of_discs = match get(columns.number_of_discs) {
        "" => 0,
        n => n
            .parse::<u32>()
            .map_err(|e| format!("invalid NumberOfDiscs '{n}': {e}"))?,
    };

    let mut app = App::new()
        .with_region(get(columns.region))
        .with_serial_code(get(columns.serial_code))
        .with_title(get(columns.title))
        .with_discs(number_of_discs);
    app.title_variations = list(columns.title_variations);
    app.disc_names = list(columns.disc_names);
    app.feature_support.analog_support = get(columns.analog_support)
        .parse()
        .map_err(|e| format!("{e}"))?;
    app.feature_support.rumble_support = get(columns.rumble_support)
        .parse()
        .map_err(|e| format!("{e}"))?;

    Ok(app)
}
