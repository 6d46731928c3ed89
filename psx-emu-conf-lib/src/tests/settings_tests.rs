use std::collections::HashMap;

use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

fn file_settings() -> Settings {
    Settings {
        paths: PathSettings {
            data: Some(PathBuf::from("file.json")),
            output: Some(PathBuf::from("file-out")),
        },
        cores: CoreSettings {
            enabled: vec!["beetle_psx".to_string()],
        },
        sources: SourceSettings {
            google_api_key: Some("file-key".to_string()),
        },
    }
}

#[test]
fn defaults_when_nothing_is_set() {
    let effective =
        EffectiveSettings::resolve_with(&Overrides::default(), &Settings::default(), no_env);

    assert_eq!(effective.data.value, vec![PathBuf::from(DEFAULT_DATA)]);
    assert_eq!(effective.data.origin, Origin::Default);
    assert_eq!(effective.output.value, PathBuf::from(DEFAULT_OUTPUT));
    assert!(effective.cores.value.is_empty());
    assert_eq!(effective.google_api_key.value, None);
    assert_eq!(effective.google_api_key.origin, Origin::Default);
}

#[test]
fn settings_file_beats_defaults() {
    let effective =
        EffectiveSettings::resolve_with(&Overrides::default(), &file_settings(), no_env);

    assert_eq!(effective.data.value, vec![PathBuf::from("file.json")]);
    assert_eq!(effective.output.origin, Origin::SettingsFile);
    assert_eq!(effective.cores.value, vec!["beetle_psx"]);
    assert_eq!(effective.google_api_key.value.as_deref(), Some("file-key"));
}

#[test]
fn environment_beats_settings_file() {
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_GOOGLE_API_KEY, "env-key"),
        (ENV_OUTPUT, "env-out"),
        (ENV_DATA, ""),
    ]);
    let lookup = |var: &str| env.get(var).map(|v| v.to_string());

    let effective =
        EffectiveSettings::resolve_with(&Overrides::default(), &file_settings(), lookup);

    assert_eq!(effective.google_api_key.value.as_deref(), Some("env-key"));
    assert_eq!(
        effective.google_api_key.origin,
        Origin::Environment(ENV_GOOGLE_API_KEY)
    );
    assert_eq!(effective.output.value, PathBuf::from("env-out"));
    // Blank variables count as unset.
    assert_eq!(effective.data.origin, Origin::SettingsFile);
}

#[test]
fn command_line_beats_everything() {
    let overrides = Overrides {
        data: vec![PathBuf::from("a.json"), PathBuf::from("b.csv")],
        output: Some(PathBuf::from("cli-out")),
        cores: vec!["pcsx_rearmed".to_string()],
        google_api_key: Some("cli-key".to_string()),
    };
    let lookup = |_: &str| Some("env".to_string());

    let effective = EffectiveSettings::resolve_with(&overrides, &file_settings(), lookup);

    assert_eq!(effective.data.value.len(), 2);
    assert_eq!(effective.data.origin, Origin::CommandLine);
    assert_eq!(effective.output.value, PathBuf::from("cli-out"));
    assert_eq!(effective.cores.value, vec!["pcsx_rearmed"]);
    assert_eq!(effective.google_api_key.value.as_deref(), Some("cli-key"));
}

#[test]
fn origin_display() {
    assert_eq!(Origin::CommandLine.to_string(), "command line");
    assert_eq!(
        Origin::Environment(ENV_DATA).to_string(),
        "environment (PSX_EMU_CONF_DATA)"
    );
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn partial_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[paths]\noutput = \"out\"\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.paths.output, Some(PathBuf::from("out")));
    assert_eq!(settings.paths.data, None);
    assert!(settings.cores.enabled.is_empty());
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[paths\n").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn save_api_key_preserves_other_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[paths]\noutput = \"out\"\n\n[extra]\nkeep = true\n").unwrap();

    save_api_key(&path, "secret").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.sources.google_api_key.as_deref(), Some("secret"));
    assert_eq!(settings.paths.output, Some(PathBuf::from("out")));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("keep = true"));
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn save_api_key_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("psx-emu-conf").join("settings.toml");

    save_api_key(&path, "secret").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.sources.google_api_key.as_deref(), Some("secret"));
}
