//! RetroArch cores.
//!
//! RetroArch reads per-content core options from
//! `config/<core internal name>/<content name>.opt`, one `key = "value"`
//! line per option. Paths produced here are relative to RetroArch's `config`
//! directory.

pub mod beetle_psx;
pub mod beetle_psx_hw;
pub mod pcsx_rearmed;

pub use beetle_psx::BeetlePsx;
pub use beetle_psx_hw::BeetlePsxHw;
pub use pcsx_rearmed::PcsxRearmed;

use std::io::{self, Write};

use psx_emu_conf_core::App;

use crate::{AlternativesLocator, Configurator, Locator};

/// Frontend name used as the emulator name prefix.
pub const NAME: &str = "RetroArch";

/// Extension of per-content core option files.
pub const OPTIONS_EXTENSION: &str = "opt";

/// What every RetroArch core shares: its names and its option key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreDescriptor {
    /// Selection name (e.g. `pcsx_rearmed`).
    pub short_name: &'static str,
    /// Name RetroArch uses for the core's config directory.
    pub internal_name: &'static str,
    pub display_name: &'static str,
    /// Prefix of every option key the core reads.
    pub option_prefix: &'static str,
}

impl CoreDescriptor {
    pub fn emulator_name(&self) -> String {
        format!("{NAME} - {}", self.display_name)
    }

    pub fn option_key(&self, option: &str) -> String {
        format!("{}{option}", self.option_prefix)
    }

    /// Options file path for a content name, or empty when there is no name.
    pub fn options_path(&self, content_name: &str) -> String {
        if content_name.is_empty() {
            return String::new();
        }
        format!(
            "{}/{content_name}.{OPTIONS_EXTENSION}",
            self.internal_name
        )
    }

    /// Options file path named after the app's title.
    pub fn title_path(&self, app: &App) -> String {
        self.options_path(&app.title)
    }

    /// Options file paths for every other name the content may be loaded
    /// under: title variations and disc names.
    pub fn alternative_paths(&self, app: &App) -> Vec<String> {
        let primary = self.title_path(app);
        let mut paths: Vec<String> = Vec::new();

        for name in app.title_variations.iter().chain(&app.disc_names) {
            let path = self.options_path(name.trim());
            if path.is_empty() || path == primary || paths.contains(&path) {
                continue;
            }
            paths.push(path);
        }

        paths
    }
}

/// A RetroArch core: a descriptor plus the options it writes.
///
/// Every implementor is a [`Configurator`] that locates its output by title,
/// with title variations and disc names as alternatives.
pub trait RetroArchCore {
    fn descriptor(&self) -> &CoreDescriptor;

    /// Full keys of the options [`write_options`](Self::write_options) writes.
    fn keys(&self) -> Vec<String>;

    fn write_options(&self, sink: &mut dyn Write, app: &App) -> io::Result<()>;
}

impl<T: RetroArchCore> Configurator for T {
    fn short_name(&self) -> &'static str {
        self.descriptor().short_name
    }

    fn emulator_name(&self) -> String {
        self.descriptor().emulator_name()
    }

    fn option_keys(&self) -> Vec<String> {
        self.keys()
    }

    fn configure(&self, sink: &mut dyn Write, app: &App) -> io::Result<()> {
        self.write_options(sink, app)
    }

    fn as_locator(&self) -> Option<&dyn Locator> {
        Some(self)
    }

    fn as_alternatives_locator(&self) -> Option<&dyn AlternativesLocator> {
        Some(self)
    }
}

impl<T: RetroArchCore> Locator for T {
    fn path(&self, app: &App) -> String {
        self.descriptor().title_path(app)
    }
}

impl<T: RetroArchCore> AlternativesLocator for T {
    fn alternative_paths(&self, app: &App) -> Vec<String> {
        self.descriptor().alternative_paths(app)
    }
}

/// Write one `key = "value"` option line.
pub fn write_option(sink: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(sink, "{key} = \"{value}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: CoreDescriptor = CoreDescriptor {
        short_name: "test_core",
        internal_name: "Test Core",
        display_name: "Test",
        option_prefix: "test_",
    };

    #[test]
    fn names_and_keys() {
        assert_eq!(CORE.emulator_name(), "RetroArch - Test");
        assert_eq!(CORE.option_key("pad1type"), "test_pad1type");
    }

    #[test]
    fn title_path_is_under_internal_name() {
        let app = App::new().with_title("Foo Game");
        assert_eq!(CORE.title_path(&app), "Test Core/Foo Game.opt");
        assert_eq!(CORE.title_path(&App::new()), "");
    }

    #[test]
    fn alternatives_cover_variations_and_discs() {
        let app = App::new()
            .with_title("Final Fantasy VII")
            .with_title_variation("Final Fantasy VII (EU)")
            .with_title_variation("Final Fantasy VII")
            .with_disc_name("Final Fantasy VII (Disc 1)")
            .with_disc_name("Final Fantasy VII (EU)")
            .with_disc_name("");

        assert_eq!(
            CORE.alternative_paths(&app),
            vec![
                "Test Core/Final Fantasy VII (EU).opt",
                "Test Core/Final Fantasy VII (Disc 1).opt",
            ]
        );
    }

    #[test]
    fn option_lines_are_quoted() {
        let mut out = Vec::new();
        write_option(&mut out, "key", "value").unwrap();
        assert_eq!(out, b"key = \"value\"\n");
    }

    struct Fixed;

    impl RetroArchCore for Fixed {
        fn descriptor(&self) -> &CoreDescriptor {
            &CORE
        }

        fn keys(&self) -> Vec<String> {
            vec![CORE.option_key("mode")]
        }

        fn write_options(&self, sink: &mut dyn Write, _app: &App) -> io::Result<()> {
            write_option(sink, &CORE.option_key("mode"), "on")
        }
    }

    #[test]
    fn cores_are_configurators_with_both_locators() {
        let core = Fixed;
        let app = App::new()
            .with_title("Foo")
            .with_title_variation("Foo (EU)");

        assert_eq!(core.short_name(), "test_core");
        assert_eq!(core.emulator_name(), "RetroArch - Test");
        assert_eq!(core.option_keys(), vec!["test_mode"]);
        assert_eq!(
            core.as_locator().unwrap().path(&app),
            "Test Core/Foo.opt"
        );
        assert_eq!(
            core.as_alternatives_locator().unwrap().alternative_paths(&app),
            vec!["Test Core/Foo (EU).opt"]
        );

        let mut out = Vec::new();
        core.configure(&mut out, &app).unwrap();
        assert_eq!(out, b"test_mode = \"on\"\n");
    }
}
