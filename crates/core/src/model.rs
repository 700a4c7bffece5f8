//! Core data types: classpath roots and resolved resources.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// What kind of location a classpath root is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootKind {
    Directory,
    /// A JAR/ZIP archive
    Archive,
}

/// Where a classpath root came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootOrigin {
    /// Passed directly (CLI flag, API call)
    Explicit,
    /// Read from an environment variable such as CLASSPATH
    Environment,
    /// Referenced by another archive's manifest Class-Path attribute
    Manifest { referenced_by: PathBuf },
}

impl RootOrigin {
    /// Origin as a string tag (for statistics and filtering)
    pub fn source_type(&self) -> &'static str {
        match self {
            RootOrigin::Explicit => "explicit",
            RootOrigin::Environment => "environment",
            RootOrigin::Manifest { .. } => "manifest",
        }
    }
}

/// A searchable classpath root. The path is canonical; the collector only
/// produces roots that existed at collection time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClasspathRoot {
    pub path: PathBuf,
    pub kind: RootKind,
    pub origin: RootOrigin,
}

impl ClasspathRoot {
    pub fn new(path: PathBuf, kind: RootKind, origin: RootOrigin) -> Self {
        Self { path, kind, origin }
    }
}

/// Physical location of a resolved resource
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceLocation {
    /// Plain file under a directory root (canonical path)
    File { path: PathBuf },
    /// Entry inside an archive root
    ArchiveEntry { archive: PathBuf, entry: String },
}

/// A resource found on the classpath.
///
/// Identity (equality, hashing, ordering) goes through the canonical
/// location only, so the same file reached via two roots deduplicates to one
/// resource even when the roots see it under different relative paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub location: ResourceLocation,
    relative: String,
}

impl Resource {
    pub fn file(path: PathBuf, relative: impl Into<String>) -> Self {
        Self {
            location: ResourceLocation::File { path },
            relative: normalize_separators(relative.into()),
        }
    }

    pub fn archive_entry(archive: PathBuf, entry: String) -> Self {
        Self {
            relative: entry.clone(),
            location: ResourceLocation::ArchiveEntry { archive, entry },
        }
    }

    /// Root-relative path of the resource: the archive entry name, or the
    /// path the file was matched under within its directory root
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// URL-style identifier: `file:/path` or `jar:file:/archive!/entry`
    pub fn uri(&self) -> String {
        match &self.location {
            ResourceLocation::File { path } => format!("file:{}", display_slashes(path)),
            ResourceLocation::ArchiveEntry { archive, entry } => {
                format!("jar:file:{}!/{}", display_slashes(archive), entry)
            }
        }
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for Resource {}

impl Hash for Resource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

impl PartialOrd for Resource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location.cmp(&other.location)
    }
}

fn normalize_separators(path: String) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path
    }
}

fn display_slashes(path: &Path) -> String {
    let display = path.to_string_lossy();
    if cfg!(windows) {
        display.replace('\\', "/")
    } else {
        display.into_owned()
    }
}
