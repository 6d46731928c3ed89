//! The "PSX - General Game Info" spreadsheet created by Reddit user "Echoj2"
//! and hosted on Google Docs.
//!
//! Each region has its own sheet. Rows carry the title in column A (hyperlinked
//! to the title's psxdatacenter.com page, which embeds the serial code) and
//! feature columns holding text such as `2 - Yes`, where the number selects
//! the level.
//!
//! Sources:
//!  - <https://docs.google.com/spreadsheets/d/1D4FKPOWCi11zhVvUcS8Bv4-IzyxH9MZRldugigTc59E>
//!  - <https://www.reddit.com/user/Echoj2>

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Url;
use serde::Deserialize;

use psx_emu_conf_core::{AnalogSupport, App, Region, RumbleSupport};

use crate::{Source, SourceError};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

const GOOGLE_DOC_ID: &str = "1D4FKPOWCi11zhVvUcS8Bv4-IzyxH9MZRldugigTc59E";

const DATA_CELL_RANGE: &str = "A2:G99999";

const HYPERLINK_FIELDS: &str = "sheets(data(rowData(values(hyperlink))))";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const COLUMN_TITLE: usize = 0;
const COLUMN_DIGITAL_ONLY: usize = 2;
const COLUMN_ANALOG: usize = 3;
const COLUMN_VIBRATION: usize = 4;

// "Digital only?" column levels.
const DIGITAL_ONLY_NO: u32 = 1;
const DIGITAL_ONLY_YES: u32 = 2;
const DIGITAL_ONLY_ANALOG_ONLY: u32 = 3;

// "Analog" column levels.
const ANALOG_YES: u32 = 1;
const ANALOG_NO: u32 = 2;

// "Vibration" column levels.
const VIBRATION_YES: u32 = 1;
const VIBRATION_NO: u32 = 2;

/// Sheets to read, in the order their apps are returned.
const REGION_SHEETS: &[(Region, &str)] = &[
    (Region::NtscU, "NTSC-U"),
    (Region::NtscJ, "NTSC-J"),
    (Region::Pal, "PAL"),
];

/// Captures the serial code from a psxdatacenter.com URL.
static LINK_SERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([A-Za-z0-9-]+)\.html").expect("static pattern"));

/// Captures the level number of a feature column.
static FEATURE_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) - (.*)").expect("static pattern"));

/// Response of the `values` endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ValueRange {
    #[serde(default)]
    pub(crate) values: Vec<Vec<serde_json::Value>>,
}

/// Response of the spreadsheet endpoint, narrowed to cell hyperlinks.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Default, Deserialize)]
struct Sheet {
    #[serde(default)]
    data: Vec<GridData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridData {
    #[serde(default)]
    row_data: Vec<RowData>,
}

#[derive(Debug, Default, Deserialize)]
struct RowData {
    #[serde(default)]
    values: Vec<CellData>,
}

#[derive(Debug, Default, Deserialize)]
struct CellData {
    #[serde(default)]
    hyperlink: Option<String>,
}

impl Spreadsheet {
    /// Hyperlink of the first cell of a row, if any.
    fn row_link(&self, row: usize) -> Option<&str> {
        self.sheets
            .first()?
            .data
            .first()?
            .row_data
            .get(row)?
            .values
            .first()?
            .hyperlink
            .as_deref()
    }
}

/// Source for the Echoj2 spreadsheet, read through the Google Sheets API.
pub struct Echoj2Sheet {
    api_key: String,
    base_url: String,
}

impl Echoj2Sheet {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: SHEETS_API_BASE.to_string(),
        }
    }

    /// Use a different API endpoint (e.g. a mirror or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn document_url(&self) -> Result<Url, SourceError> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            SourceError::unexpected_response(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        base.join(GOOGLE_DOC_ID).map_err(|e| {
            SourceError::unexpected_response(format!("invalid document URL: {e}"))
        })
    }

    fn fetch_values(
        &self,
        client: &reqwest::blocking::Client,
        cell_range: &str,
    ) -> Result<ValueRange, SourceError> {
        let mut url = self.document_url()?;
        url.path_segments_mut()
            .map_err(|_| SourceError::unexpected_response("base URL cannot have a path"))?
            .push("values")
            .push(cell_range);

        let response = client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn fetch_links(
        &self,
        client: &reqwest::blocking::Client,
        cell_range: &str,
    ) -> Result<Spreadsheet, SourceError> {
        let url = self.document_url()?;
        let response = client
            .get(url)
            .query(&[
                ("ranges", cell_range),
                ("fields", HYPERLINK_FIELDS),
                ("includeGridData", "true"),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

impl Source for Echoj2Sheet {
    fn name(&self) -> &str {
        "Echoj2 PSX General Game Info"
    }

    fn fetch(&self) -> Result<Vec<App>, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::missing_api_key(
                "a Google API key is required to read the Echoj2 spreadsheet",
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut apps = Vec::new();
        for &(region, sheet) in REGION_SHEETS {
            let cell_range = format!("{sheet}!{DATA_CELL_RANGE}");
            log::debug!("Fetching {cell_range}");

            let values = self.fetch_values(&client, &cell_range)?;
            let links = self.fetch_links(&client, &cell_range)?;
            let sheet_apps = parse_sheet(region, &values, &links);

            log::debug!("Read {} rows from sheet {sheet}", sheet_apps.len());
            apps.extend(sheet_apps);
        }

        Ok(apps)
    }
}

/// Map a sheet's rows to apps.
pub(crate) fn parse_sheet(region: Region, values: &ValueRange, links: &Spreadsheet) -> Vec<App> {
    values
        .values
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let serial_code = links
                .row_link(i)
                .and_then(|link| LINK_SERIAL.captures(link))
                .map(|caps| caps[1].to_string())
                .unwrap_or_default();

            let digital_only = feature_level(cell_text(row, COLUMN_DIGITAL_ONLY).as_str());
            let analog = feature_level(cell_text(row, COLUMN_ANALOG).as_str());
            let vibration = feature_level(cell_text(row, COLUMN_VIBRATION).as_str());

            App::new()
                .with_region(region.as_str())
                .with_serial_code(serial_code)
                .with_title(cell_text(row, COLUMN_TITLE))
                .with_analog(analog_support(digital_only, analog))
                .with_rumble(rumble_support(vibration))
        })
        .collect()
}

fn cell_text(row: &[serde_json::Value], column: usize) -> String {
    match row.get(column) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// The level number of a feature cell (`"2 - Yes"` is 2), or 0.
fn feature_level(cell: &str) -> u32 {
    FEATURE_LEVEL
        .captures(cell)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

fn analog_support(digital_only: u32, analog: u32) -> AnalogSupport {
    if digital_only == DIGITAL_ONLY_YES || analog == ANALOG_NO {
        AnalogSupport::No
    } else if digital_only == DIGITAL_ONLY_NO || analog == ANALOG_YES {
        AnalogSupport::Yes
    } else if digital_only == DIGITAL_ONLY_ANALOG_ONLY {
        AnalogSupport::Required
    } else {
        AnalogSupport::Unknown
    }
}

fn rumble_support(vibration: u32) -> RumbleSupport {
    match vibration {
        VIBRATION_NO => RumbleSupport::No,
        VIBRATION_YES => RumbleSupport::Yes,
        _ => RumbleSupport::Unknown,
    }
}

#[cfg(test)]
#[path = "tests/echoj2_tests.rs"]
mod tests;
