use super::*;
use psx_emu_conf_core::{AnalogSupport, RumbleSupport};

const DATA: &str = r#"[
  {
    "Region": "NTSC-U",
    "SerialCode": "SCUS-94900",
    "Title": "Crash Bandicoot",
    "FeatureSupport": { "AnalogSupport": 1, "RumbleSupport": 1 }
  },
  {
    "Region": "PAL",
    "Title": "Ape Escape",
    "FeatureSupport": { "AnalogSupport": "Required", "RumbleSupport": "Yes" }
  }
]"#;

#[test]
fn parses_an_array_of_apps() {
    let apps = parse_apps(DATA).unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].serial_code, "SCUS-94900");
    assert_eq!(apps[0].feature_support.analog_support, AnalogSupport::No);
    assert_eq!(apps[1].feature_support.analog_support, AnalogSupport::Required);
    assert_eq!(apps[1].feature_support.rumble_support, RumbleSupport::Yes);
}

#[test]
fn skips_entries_that_do_not_decode() {
    let data = r#"[
        {"Title": "Good"},
        {"Title": "Bad", "FeatureSupport": {"AnalogSupport": 9}},
        "not an app",
        {"Title": "Also Good"}
    ]"#;
    let apps = parse_apps(data).unwrap();
    let titles: Vec<&str> = apps.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Good", "Also Good"]);
}

#[test]
fn rejects_documents_that_are_not_arrays() {
    assert!(parse_apps(r#"{"Title": "Single"}"#).is_err());
    assert!(parse_apps("not json").is_err());
}

#[test]
fn written_output_parses_back() {
    let apps = parse_apps(DATA).unwrap();
    let mut out = Vec::new();
    write_apps(&mut out, &apps).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("]\n"));
    assert!(text.contains("\n  {\n    \"Region\": \"NTSC-U\","));
    assert_eq!(parse_apps(&text).unwrap(), apps);
}

#[test]
fn empty_collection_writes_empty_array() {
    let mut out = Vec::new();
    write_apps(&mut out, &[]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
}

#[test]
fn file_source_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, DATA).unwrap();

    let source = JsonFileSource::new(&path);
    assert_eq!(source.path(), path.as_path());
    assert_eq!(source.fetch().unwrap().len(), 2);
}

#[test]
fn file_source_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileSource::new(dir.path().join("missing.json"));
    let err = source.fetch().unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[test]
fn file_source_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{").unwrap();

    let err = JsonFileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, SourceError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}
