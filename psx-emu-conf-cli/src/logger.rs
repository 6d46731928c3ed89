//! Log output setup.
//!
//! All command output goes through the `log` macros and is written to stderr,
//! leaving stdout free for data (`fetch` without `--output`). With `--logfile`
//! every line is also appended to a file with ANSI styling removed.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

/// Writes to stderr and, when present, to a log file without ANSI escapes.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger. `RUST_LOG` overrides the level picked from the
/// flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = logfile
        .map(|path| OpenOptions::new().create(true).append(true).open(path))
        .transpose()?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(Tee { file })));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.try_init().map_err(io::Error::other)
}
