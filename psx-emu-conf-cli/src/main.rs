//! psx-emu-conf CLI
//!
//! Command-line interface for fetching PlayStation title data and generating
//! per-game emulator configuration from it.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: could not set up logging: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Fetch {
            output,
            sources,
            api_key,
        } => commands::fetch::run_fetch(output, sources, api_key),
        Commands::Generate {
            data,
            output,
            cores,
            dry_run,
            strict,
        } => commands::generate::run_generate(
            data.data,
            output,
            cores,
            dry_run,
            strict,
            cli.quiet,
            cli.verbose,
        ),
        Commands::Check { data } => commands::check::run_check(data.data),
        Commands::Cores => {
            commands::cores::run_cores();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetKey { key } => commands::config::run_config_set_key(&key),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
