//! Output path resolution.
//!
//! Configurators suggest relative paths built from app titles, which are
//! free text. Every suggestion is cleaned lexically and checked before use:
//! a path must name a file and must stay under the output root.

use std::path::{Path, PathBuf};

use psx_emu_conf_core::App;

use crate::{Configurator, PathError};

/// Lexically clean a `/`-separated path: collapse repeated separators,
/// drop `.` components and resolve `..` against preceding components.
///
/// The empty path cleans to `.`. A rooted path stays rooted, and `..` at the
/// root is dropped.
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Clean and check a suggested path, returning it relative to the output root.
///
/// Leading separators are dropped, so `/a/b.opt` resolves to `a/b.opt`.
pub fn resolve_path(candidate: &str) -> Result<String, PathError> {
    let cleaned = clean_path(candidate);
    if cleaned == "." || cleaned == "/" {
        return Err(PathError::incomplete(candidate));
    }

    let relative = cleaned.trim_start_matches('/');
    if relative == ".." || relative.starts_with("../") {
        return Err(PathError::escapes_root(candidate));
    }

    Ok(relative.to_string())
}

/// Join a resolved relative path under `root`.
pub fn join_under(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// The primary output path for `app`.
///
/// Uses the configurator's [`Locator`](crate::Locator) suggestion when there
/// is one, otherwise the serial code, otherwise the title.
pub fn primary_path(configurator: &dyn Configurator, app: &App) -> Result<String, PathError> {
    let suggested = configurator
        .as_locator()
        .map(|locator| locator.path(app))
        .filter(|path| !path.is_empty());

    let candidate = match suggested {
        Some(path) => path,
        None if !app.serial_code.is_empty() => app.serial_code.clone(),
        None if !app.title.is_empty() => app.title.clone(),
        None => return Err(PathError::incomplete("")),
    };

    resolve_path(&candidate)
}

/// Whether a path is the canonical one or an extra copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Primary,
    Alternative,
}

/// One output location for a configurator's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath {
    pub kind: PathKind,
    pub resolved: Result<String, PathError>,
}

/// Every output location for `app`: the primary path first, then any
/// alternatives.
///
/// Each entry is resolved independently, so a bad alternative doesn't affect
/// the others. Alternatives resolving to an already listed path are dropped.
pub fn config_paths(configurator: &dyn Configurator, app: &App) -> Vec<ConfigPath> {
    let primary = primary_path(configurator, app);
    let mut seen: Vec<String> = primary.iter().cloned().collect();
    let mut paths = vec![ConfigPath {
        kind: PathKind::Primary,
        resolved: primary,
    }];

    let Some(locator) = configurator.as_alternatives_locator() else {
        return paths;
    };

    for candidate in locator.alternative_paths(app) {
        let resolved = resolve_path(&candidate);
        if let Ok(path) = &resolved {
            if seen.contains(path) {
                log::debug!("Skipping duplicate path '{path}' for {}", app.label());
                continue;
            }
            seen.push(path.clone());
        }
        paths.push(ConfigPath {
            kind: PathKind::Alternative,
            resolved,
        });
    }

    paths
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
