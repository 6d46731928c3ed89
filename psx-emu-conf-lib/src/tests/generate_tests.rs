use std::io::{self, Write};

use super::*;
use crate::progress::SilentProgress;
use psx_emu_conf_core::{AnalogSupport, RumbleSupport};
use psx_emu_conf_emuconf::Registry;
use psx_emu_conf_emuconf::retroarch::{BeetlePsx, PcsxRearmed};

fn game(title: &str) -> App {
    App::new()
        .with_region("PAL")
        .with_serial_code("SCES-00001")
        .with_title(title)
}

#[test]
fn writes_one_file_per_core_under_root() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Registry::retroarch();
    let cores = registry.select::<&str>(&[]).unwrap();
    let apps = vec![game("Wipeout").with_analog(AnalogSupport::Yes)];

    let report = generate(
        &apps,
        &cores,
        dir.path(),
        &GenerateOptions::default(),
        &SilentProgress,
    );

    assert!(!report.has_failures());
    assert_eq!(report.written.len(), 3);
    let beetle =
        std::fs::read_to_string(dir.path().join("Beetle PSX").join("Wipeout.opt")).unwrap();
    assert_eq!(beetle, "beetle_psx_analog_toggle = \"enabled\"\n");
    assert!(dir.path().join("Beetle PSX HW").join("Wipeout.opt").is_file());
    assert!(dir.path().join("PCSX-ReARMed").join("Wipeout.opt").is_file());
}

#[test]
fn alternatives_get_the_same_content() {
    let dir = tempfile::tempdir().unwrap();
    let core = PcsxRearmed::new();
    let apps = vec![
        game("Metal Gear Solid")
            .with_disc_name("Metal Gear Solid (Disc 1)")
            .with_disc_name("Metal Gear Solid (Disc 2)")
            .with_rumble(RumbleSupport::Yes),
    ];

    let report = generate(
        &apps,
        &[&core],
        dir.path(),
        &GenerateOptions::default(),
        &SilentProgress,
    );
    assert_eq!(report.written.len(), 3);
    assert_eq!(report.alternatives_written(), 2);

    let base = dir.path().join("PCSX-ReARMed");
    let primary = std::fs::read(base.join("Metal Gear Solid.opt")).unwrap();
    for disc in ["Metal Gear Solid (Disc 1).opt", "Metal Gear Solid (Disc 2).opt"] {
        assert_eq!(std::fs::read(base.join(disc)).unwrap(), primary);
    }
}

#[test]
fn dry_run_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let core = BeetlePsx::new();
    let options = GenerateOptions { dry_run: true };

    let report = generate(
        &[game("Wipeout")],
        &[&core],
        dir.path(),
        &options,
        &SilentProgress,
    );

    assert!(report.dry_run);
    assert_eq!(report.written.len(), 1);
    assert_eq!(
        report.written[0].path,
        dir.path().join("Beetle PSX").join("Wipeout.opt")
    );
    assert!(!dir.path().join("Beetle PSX").exists());
}

#[test]
fn path_failures_do_not_stop_other_paths() {
    let dir = tempfile::tempdir().unwrap();
    let core = BeetlePsx::new();
    let apps = vec![game("../../outside"), game("Inside")];

    let report = generate(
        &apps,
        &[&core],
        dir.path(),
        &GenerateOptions::default(),
        &SilentProgress,
    );

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].core, "beetle_psx");
    assert!(matches!(report.failures[0].error, EmuConfError::Path(_)));
    assert_eq!(report.written.len(), 1);
    assert!(dir.path().join("Beetle PSX").join("Inside.opt").is_file());
}

/// A configurator whose output always fails to write.
struct Failing;

impl Configurator for Failing {
    fn short_name(&self) -> &'static str {
        "failing"
    }

    fn emulator_name(&self) -> String {
        "Failing".to_string()
    }

    fn option_keys(&self) -> Vec<String> {
        Vec::new()
    }

    fn configure(&self, _sink: &mut dyn Write, _app: &App) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}

#[test]
fn configure_failures_are_reported_per_core() {
    let dir = tempfile::tempdir().unwrap();
    let beetle = BeetlePsx::new();
    let configurators: [&dyn Configurator; 2] = [&Failing, &beetle];

    let report = generate(
        &[game("Wipeout")],
        &configurators,
        dir.path(),
        &GenerateOptions::default(),
        &SilentProgress,
    );

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].core, "failing");
    assert_eq!(
        report.failures[0].to_string(),
        "Wipeout (SCES-00001) [failing]: I/O error: sink closed"
    );
    assert_eq!(report.written.len(), 1);
}

#[test]
fn write_errors_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    // A file where the core directory should be.
    std::fs::write(dir.path().join("Beetle PSX"), "").unwrap();
    let core = BeetlePsx::new();

    let report = generate(
        &[game("Wipeout")],
        &[&core],
        dir.path(),
        &GenerateOptions::default(),
        &SilentProgress,
    );

    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].path.as_deref(),
        Some("Beetle PSX/Wipeout.opt")
    );
    assert!(matches!(report.failures[0].error, EmuConfError::Io(_)));
}
