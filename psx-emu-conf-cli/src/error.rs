use thiserror::Error;

use psx_emu_conf_emuconf::EmuConfError;
use psx_emu_conf_import::SourceError;
use psx_emu_conf_lib::SettingsError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A source could not be read
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Settings file could not be read or written
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Core selection or configuration error
    #[error("{0}")]
    EmuConf(#[from] EmuConfError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Generation finished with per-file failures
    #[error("{0} configuration file(s) could not be written")]
    Failures(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
