use super::*;
use serde_json::json;

#[test]
fn serializes_with_pascal_case_and_omits_empty_fields() {
    let app = App::new()
        .with_region("PAL")
        .with_serial_code("SCES-00001")
        .with_title("Game A")
        .with_analog(AnalogSupport::Yes);

    let value = serde_json::to_value(&app).unwrap();
    assert_eq!(
        value,
        json!({
            "Region": "PAL",
            "SerialCode": "SCES-00001",
            "Title": "Game A",
            "FeatureSupport": {
                "AnalogSupport": 2,
                "RumbleSupport": 0
            }
        })
    );
}

#[test]
fn serializes_lists_and_disc_count_when_present() {
    let app = App::new()
        .with_title("Final Fantasy VII")
        .with_title_variation("Final Fantasy 7")
        .with_discs(3)
        .with_disc_name("Disc 1");

    let value = serde_json::to_value(&app).unwrap();
    assert_eq!(value["TitleVariations"], json!(["Final Fantasy 7"]));
    assert_eq!(value["NumberOfDiscs"], json!(3));
    assert_eq!(value["DiscNames"], json!(["Disc 1"]));
    assert!(value.get("Region").is_none());
}

#[test]
fn deserializes_missing_fields_as_empty() {
    let app: App = serde_json::from_str(r#"{"Title": "Crash Bandicoot"}"#).unwrap();
    assert_eq!(app.title, "Crash Bandicoot");
    assert!(app.region.is_empty());
    assert!(app.serial_code.is_empty());
    assert_eq!(app.number_of_discs, 0);
    assert_eq!(app.feature_support, FeatureSupport::default());
}

#[test]
fn deserializes_named_support_levels() {
    let app: App = serde_json::from_str(
        r#"{"Title": "Ape Escape", "FeatureSupport": {"AnalogSupport": "required", "RumbleSupport": "Yes"}}"#,
    )
    .unwrap();
    assert_eq!(app.feature_support.analog_support, AnalogSupport::Required);
    assert_eq!(app.feature_support.rumble_support, RumbleSupport::Yes);
}

#[test]
fn rejects_out_of_range_support_levels() {
    let result: Result<App, _> =
        serde_json::from_str(r#"{"Title": "X", "FeatureSupport": {"AnalogSupport": 7}}"#);
    assert!(result.is_err());

    let result: Result<App, _> =
        serde_json::from_str(r#"{"Title": "X", "FeatureSupport": {"RumbleSupport": 3}}"#);
    assert!(result.is_err());
}

#[test]
fn analog_capable_covers_yes_and_required() {
    let mut support = FeatureSupport::default();
    assert!(!support.analog_capable());
    support.analog_support = AnalogSupport::No;
    assert!(!support.analog_capable());
    support.analog_support = AnalogSupport::Yes;
    assert!(support.analog_capable());
    support.analog_support = AnalogSupport::Required;
    assert!(support.analog_capable());
}

#[test]
fn known_region_parses_canonical_text() {
    assert_eq!(App::new().with_region("NTSC-J").known_region(), Some(Region::NtscJ));
    assert_eq!(App::new().with_region("JPN").known_region(), None);
    assert_eq!(App::new().known_region(), None);
}

#[test]
fn label_prefers_title_and_serial() {
    let app = App::new().with_serial_code("SCUS-94900").with_title("Crash Bandicoot");
    assert_eq!(app.label(), "Crash Bandicoot (SCUS-94900)");
    assert_eq!(App::new().with_serial_code("SCUS-94900").label(), "SCUS-94900");
    assert_eq!(App::new().label(), "<untitled>");
}
