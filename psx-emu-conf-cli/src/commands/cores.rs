use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use psx_emu_conf_emuconf::Registry;

pub(crate) fn run_cores() {
    let registry = Registry::retroarch();

    log::info!("Supported cores:");
    log::info!("");

    for configurator in registry.configurators() {
        log::info!(
            "  {} [{}]",
            configurator
                .short_name()
                .if_supports_color(Stderr, |t| t.bold()),
            configurator
                .emulator_name()
                .if_supports_color(Stderr, |t| t.cyan()),
        );
        log::info!("    Options: {}", configurator.option_keys().join(", "));
    }
}
