//! The psx-emu-conf pipeline: ingest app collections from sources, then
//! generate emulator configuration files for them.
//!
//! Frontends (the CLI) drive this crate; it never prints, only logs.

pub mod error;
pub mod generate;
pub mod ingest;
pub mod progress;
pub mod settings;

pub use error::SettingsError;
pub use generate::{GenerateFailure, GenerateOptions, GenerateReport, WrittenFile, generate};
pub use ingest::{Ingested, Rejected, fetch_all, ingest};
pub use progress::{GenerateProgress, LogProgress, SilentProgress};
pub use settings::{EffectiveSettings, Origin, Overrides, Resolved, Settings, settings_path};
