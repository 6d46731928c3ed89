//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "psx-emu-conf")]
#[command(about = "Generate per-game PlayStation emulator configuration", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Data files to read, shared by commands that consume title data.
#[derive(Args, Clone)]
pub(crate) struct DataArgs {
    /// Data files (JSON or CSV), highest trust first
    #[arg(short, long = "data", value_name = "FILE", num_args = 1..)]
    pub data: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch title data from sources and write it as JSON
    Fetch {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sources in trust order: "sheet" or a JSON/CSV file (default: sheet)
        #[arg(short, long = "source", value_name = "SOURCE", num_args = 1..)]
        sources: Vec<String>,

        /// Google API key for the sheet source
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Write emulator configuration files for every title
    Generate {
        #[command(flatten)]
        data: DataArgs,

        /// Output directory for configuration files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cores to generate for (e.g., pcsx_rearmed,beetle_psx); default all
        #[arg(short, long, value_delimiter = ',')]
        cores: Vec<String>,

        /// Show planned files without writing them
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Exit with an error if any file could not be written
        #[arg(long)]
        strict: bool,
    },

    /// Validate and merge data files without writing anything
    Check {
        #[command(flatten)]
        data: DataArgs,
    },

    /// List supported emulator cores
    Cores,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each comes from
    Show,

    /// Print the settings file path
    Path,

    /// Save the Google API key to the settings file
    SetKey {
        /// The API key
        key: String,
    },
}
