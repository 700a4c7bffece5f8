//! JAR manifest parsing, limited to what root collection needs:
//! the `Class-Path` attribute of the main section.

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Read the Class-Path entries of an archive's manifest.
///
/// Relative entries are resolved against the archive's parent directory;
/// absolute entries and `file:` URLs are used as-is. A missing manifest, or a
/// manifest without a Class-Path attribute, yields an empty list.
pub fn read_class_path(archive_path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut raw = String::new();
    match archive.by_name(MANIFEST_PATH) {
        Ok(mut entry) => {
            entry.read_to_string(&mut raw)?;
        }
        Err(ZipError::FileNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    }

    let Some(value) = attribute_value(&raw, "Class-Path") else {
        return Ok(Vec::new());
    };

    let base = archive_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(parse_class_path_value(&value, base))
}

/// Undo the 72-byte line wrapping of the manifest format: a line starting
/// with a single space continues the previous line.
fn unwrap_continuations(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(' ') {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        lines.push(line.to_string());
    }
    lines
}

/// Look up a main-section attribute by name (case-insensitive, per the JAR
/// spec). The main section ends at the first blank line; per-entry sections
/// after it never carry Class-Path.
fn attribute_value(raw: &str, name: &str) -> Option<String> {
    for line in unwrap_continuations(raw) {
        if line.is_empty() {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            debug!("skipping malformed manifest line: {line:?}");
            continue;
        };
        if key.trim().eq_ignore_ascii_case(name) {
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Split a Class-Path attribute value into paths. Entries are whitespace
/// separated; `file:` URLs (as written by Gradle pathing JARs) are reduced to
/// their path part.
fn parse_class_path_value(value: &str, base: &Path) -> Vec<PathBuf> {
    value
        .split_whitespace()
        .map(strip_file_scheme)
        .map(|entry| {
            let path = PathBuf::from(entry);
            if path.is_absolute() { path } else { base.join(path) }
        })
        .collect()
}

fn strip_file_scheme(entry: &str) -> String {
    let Some(rest) = entry.strip_prefix("file:") else {
        return entry.to_string();
    };
    // file:///x and file:/x both mean /x
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    rest.to_string()
}
