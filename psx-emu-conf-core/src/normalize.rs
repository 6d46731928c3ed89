//! Normalization of PlayStation software names and references.
//!
//! Normalization never fails: values that can't be made canonical are
//! cleared (serial codes) or left as-is for validation to reject (regions).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::App;

/// A letter run followed, anywhere later, by a digit run.
static SERIAL_CODE_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+).*?(\d+)").expect("static pattern"));

/// The canonical `LLLL-DDDDD` shape.
static SERIAL_CODE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}-\d{5}$").expect("static pattern"));

/// Normalize a region string: trimmed and uppercased.
pub fn region(region: &str) -> String {
    region.trim().to_uppercase()
}

/// Normalize a serial code to `LLLL-DDDDD`, or return an empty string when the
/// input can't be read as one.
///
/// ```
/// use psx_emu_conf_core::normalize::serial_code;
///
/// assert_eq!(serial_code(" sces12345 "), "SCES-12345");
/// assert_eq!(serial_code("SLUS 00594"), "SLUS-00594");
/// assert_eq!(serial_code("ABC-123"), "");
/// ```
pub fn serial_code(serial_code: &str) -> String {
    let mut normalized = serial_code.trim().to_uppercase();

    if let Some(caps) = SERIAL_CODE_LOOSE.captures(&normalized) {
        normalized = format!("{}-{}", &caps[1], &caps[2]);
    }

    if !SERIAL_CODE_FORMAT.is_match(&normalized) {
        return String::new();
    }

    normalized
}

/// Normalize a title, returning it along with any common variations of it.
///
/// Titles are proper nouns, so only surrounding whitespace is removed.
pub fn title(title: &str) -> (String, Vec<String>) {
    (title.trim().to_string(), Vec::new())
}

/// Remove duplicates (keeping the first occurrence) and sort ascending.
pub fn dedup_sorted(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect();
    unique.sort();
    unique
}

impl App {
    /// Normalize this app in place. Applying it twice changes nothing.
    pub fn normalize(&mut self) {
        let (title, variations) = title(&self.title);

        let existing = std::mem::take(&mut self.title_variations);
        self.title_variations = dedup_sorted(existing.into_iter().chain(variations));
        self.disc_names = dedup_sorted(std::mem::take(&mut self.disc_names));

        self.region = region(&self.region);
        self.serial_code = serial_code(&self.serial_code);
        self.title = title;
    }

    /// A normalized copy of this app.
    pub fn normalized(&self) -> App {
        let mut app = self.clone();
        app.normalize();
        app
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
