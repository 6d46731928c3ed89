use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_lib::settings::{self, EffectiveSettings, Overrides, Resolved};

use super::load_settings;
use crate::error::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(2).collect::<String>())
    }
}

fn log_setting<T>(name: &str, value: &str, resolved: &Resolved<T>) {
    log::info!(
        "  {} {} {}",
        format!("{name}:").if_supports_color(Stderr, |t| t.cyan()),
        value,
        format!("({})", resolved.origin).if_supports_color(Stderr, |t| t.dimmed()),
    );
}

/// Show effective settings and where each comes from.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "psx-emu-conf Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("");
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stderr, |t| t.cyan()),
        if path.exists() {
            "(exists)".if_supports_color(Stderr, |t| t.green()).to_string()
        } else {
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()).to_string()
        },
    );
    log::info!("");

    let effective = EffectiveSettings::resolve(&Overrides::default(), &load_settings());

    let data = effective
        .data
        .value
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log_setting("data", &data, &effective.data);

    let output = effective.output.value.display().to_string();
    log_setting("output", &output, &effective.output);

    let cores = if effective.cores.value.is_empty() {
        "all".to_string()
    } else {
        effective.cores.value.join(", ")
    };
    log_setting("cores", &cores, &effective.cores);

    let key = match &effective.google_api_key.value {
        Some(key) => mask_value(key),
        None => "not set".if_supports_color(Stderr, |t| t.yellow()).to_string(),
    };
    log_setting("google_api_key", &key, &effective.google_api_key);
}

/// Print the settings file path to stdout.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

/// Save the Google API key to the settings file.
pub(crate) fn run_config_set_key(key: &str) -> Result<(), CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::config("API key must not be empty"));
    }

    let path = settings::settings_path();
    settings::save_api_key(&path, key)?;
    log::info!(
        "{} Saved API key to {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        path.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    Ok(())
}
