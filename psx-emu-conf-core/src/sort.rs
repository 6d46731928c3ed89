//! Default presentation order for apps.

use std::cmp::Ordering;

use crate::App;

/// Compare two apps by region, then serial code, then title.
///
/// Each key is compared as text, with empty values sorting after non-empty
/// ones.
pub fn compare_default(a: &App, b: &App) -> Ordering {
    empty_last(&a.region, &b.region)
        .then_with(|| empty_last(&a.serial_code, &b.serial_code))
        .then_with(|| empty_last(&a.title, &b.title))
}

/// Stable sort of apps in the default order (see [`compare_default`]).
pub fn sort_default(apps: &mut [App]) {
    apps.sort_by(compare_default);
}

fn empty_last(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(region: &str, serial: &str, title: &str) -> App {
        App::new()
            .with_region(region)
            .with_serial_code(serial)
            .with_title(title)
    }

    #[test]
    fn regions_sort_with_empty_last() {
        let mut apps = vec![
            app("PAL", "SCES-00001", "Foo"),
            app("NTSC-U", "SCES-00001", "Foo"),
            app("", "SCES-00001", "Foo"),
        ];
        sort_default(&mut apps);
        let regions: Vec<&str> = apps.iter().map(|a| a.region.as_str()).collect();
        assert_eq!(regions, vec!["NTSC-U", "PAL", ""]);
    }

    #[test]
    fn serial_code_breaks_region_ties() {
        let mut apps = vec![
            app("PAL", "", "Alpha"),
            app("PAL", "SLES-00002", "Zeta"),
            app("PAL", "SCES-00001", "Omega"),
        ];
        sort_default(&mut apps);
        let serials: Vec<&str> = apps.iter().map(|a| a.serial_code.as_str()).collect();
        assert_eq!(serials, vec!["SCES-00001", "SLES-00002", ""]);
    }

    #[test]
    fn title_breaks_remaining_ties() {
        let mut apps = vec![
            app("NTSC-J", "", ""),
            app("NTSC-J", "", "Beta"),
            app("NTSC-J", "", "Alpha"),
        ];
        sort_default(&mut apps);
        let titles: Vec<&str> = apps.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", ""]);
    }

    #[test]
    fn region_outranks_serial_and_title() {
        let a = app("NTSC-U", "SLUS-99999", "Zeta");
        let b = app("PAL", "SCES-00001", "Alpha");
        assert_eq!(compare_default(&a, &b), Ordering::Less);
        assert_eq!(compare_default(&b, &a), Ordering::Greater);
    }

    #[test]
    fn fully_tied_records_keep_their_order() {
        let first = app("PAL", "SCES-00001", "Foo").with_discs(1);
        let second = app("PAL", "SCES-00001", "Foo").with_discs(2);
        let mut apps = vec![first.clone(), second.clone()];
        sort_default(&mut apps);
        assert_eq!(apps, vec![first, second]);
    }
}
