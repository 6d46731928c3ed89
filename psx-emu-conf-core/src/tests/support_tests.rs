use super::*;

#[test]
fn levels_round_trip() {
    for &level in AnalogSupport::all() {
        assert_eq!(AnalogSupport::from_level(level.level().into()), Some(level));
        assert!(level.is_known());
    }
    for &level in RumbleSupport::all() {
        assert_eq!(RumbleSupport::from_level(level.level().into()), Some(level));
        assert!(level.is_known());
    }
}

#[test]
fn out_of_range_levels_are_rejected() {
    assert_eq!(AnalogSupport::from_level(4), None);
    assert_eq!(RumbleSupport::from_level(3), None);
}

#[test]
fn unknown_is_level_zero_and_default() {
    assert_eq!(AnalogSupport::default(), AnalogSupport::Unknown);
    assert_eq!(AnalogSupport::Unknown.level(), 0);
    assert_eq!(RumbleSupport::default(), RumbleSupport::Unknown);
    assert_eq!(RumbleSupport::Unknown.level(), 0);
}

#[test]
fn parses_names_case_insensitively() {
    let cases = [
        ("yes", AnalogSupport::Yes),
        ("REQUIRED", AnalogSupport::Required),
        (" No ", AnalogSupport::No),
        ("unknown", AnalogSupport::Unknown),
        ("", AnalogSupport::Unknown),
        ("3", AnalogSupport::Required),
    ];
    for (input, expected) in cases {
        let parsed: AnalogSupport = input.parse().unwrap();
        assert_eq!(parsed, expected, "input '{}'", input);
    }

    assert_eq!("Yes".parse::<RumbleSupport>().unwrap(), RumbleSupport::Yes);
    assert_eq!("1".parse::<RumbleSupport>().unwrap(), RumbleSupport::No);
}

#[test]
fn parse_errors_name_the_kind() {
    let err = "required".parse::<RumbleSupport>().unwrap_err();
    assert_eq!(err.to_string(), "unknown rumble-support level: 'required'");

    let err = "9".parse::<AnalogSupport>().unwrap_err();
    assert_eq!(
        err,
        SupportLevelError::UnknownLevel {
            kind: "analog-support",
            level: 9
        }
    );
}

#[test]
fn display_uses_level_names() {
    assert_eq!(AnalogSupport::Required.to_string(), "Required");
    assert_eq!(RumbleSupport::No.to_string(), "No");
}
