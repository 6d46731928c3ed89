//! Emulator configurators: turning an app's feature support into
//! emulator-specific configuration text, and deciding where that text goes.
//!
//! A [`Configurator`] renders text for one emulator core. Where the output
//! should be written is an optional capability: a configurator may implement
//! [`Locator`] to suggest a single path and [`AlternativesLocator`] to suggest
//! extra ones. Suggested paths are never trusted as-is; see [`path`].

pub mod error;
pub mod path;
pub mod registry;
pub mod retroarch;

pub use error::{EmuConfError, PathError};
pub use path::{
    ConfigPath, PathKind, clean_path, config_paths, join_under, primary_path, resolve_path,
};
pub use registry::Registry;

use std::io::{self, Write};

use psx_emu_conf_core::App;

/// Renders configuration text for one emulator core.
pub trait Configurator {
    /// Stable identifier used to select this configurator (e.g. `pcsx_rearmed`).
    fn short_name(&self) -> &'static str;

    /// Human-readable emulator name (e.g. "RetroArch - PCSX ReARMed").
    fn emulator_name(&self) -> String;

    /// Configuration keys this configurator writes, in output order.
    fn option_keys(&self) -> Vec<String>;

    /// Write the configuration for `app` into `sink`.
    fn configure(&self, sink: &mut dyn Write, app: &App) -> io::Result<()>;

    /// The single-path capability, if this configurator has one.
    fn as_locator(&self) -> Option<&dyn Locator> {
        None
    }

    /// The alternative-paths capability, if this configurator has one.
    fn as_alternatives_locator(&self) -> Option<&dyn AlternativesLocator> {
        None
    }
}

/// Suggests the canonical output path for an app's configuration.
pub trait Locator {
    /// Relative output path, or an empty string for "no suggestion".
    fn path(&self, app: &App) -> String;
}

/// Suggests additional output paths, each written with the same content as
/// the primary one.
pub trait AlternativesLocator {
    fn alternative_paths(&self, app: &App) -> Vec<String>;
}

/// Render a configurator's output for `app` into memory.
pub fn render(configurator: &dyn Configurator, app: &App) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    configurator.configure(&mut buf, app)?;
    Ok(buf)
}
