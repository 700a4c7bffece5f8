//! Classpath root collection.
//!
//! Discoverers yield raw classpath entries; the collector canonicalizes and
//! deduplicates them, and transitively follows archive manifests' Class-Path
//! attributes. Manifest entries may be relative or absolute; both become
//! ordinary roots.

use crate::manifest;
use crate::model::{ClasspathRoot, RootKind, RootOrigin};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A classpath entry as discovered, before canonicalization
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub path: PathBuf,
    pub origin: RootOrigin,
}

/// Source of raw classpath entries
pub trait RootDiscoverer: Send + Sync {
    /// Yield candidate entries (streaming)
    fn discover(&self) -> Box<dyn Iterator<Item = RawEntry> + Send + '_>;

    /// Discoverer name (for logging)
    fn name(&self) -> &str;
}

/// A fixed list of entries (CLI flag, tests)
pub struct ExplicitDiscoverer {
    entries: Vec<PathBuf>,
}

impl ExplicitDiscoverer {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Split a platform path-separator list (`:` on Unix, `;` on Windows)
    pub fn from_path_list(list: &str) -> Self {
        Self::new(split_path_list(list))
    }
}

impl RootDiscoverer for ExplicitDiscoverer {
    fn discover(&self) -> Box<dyn Iterator<Item = RawEntry> + Send + '_> {
        Box::new(self.entries.iter().map(|path| RawEntry {
            path: path.clone(),
            origin: RootOrigin::Explicit,
        }))
    }

    fn name(&self) -> &str {
        "explicit"
    }
}

/// Reads entries from an environment variable, CLASSPATH by convention
pub struct EnvDiscoverer {
    var: String,
}

impl EnvDiscoverer {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl RootDiscoverer for EnvDiscoverer {
    fn discover(&self) -> Box<dyn Iterator<Item = RawEntry> + Send + '_> {
        let entries = match std::env::var(&self.var) {
            Ok(value) => split_path_list(&value),
            Err(_) => Vec::new(),
        };
        Box::new(entries.into_iter().map(|path| RawEntry {
            path,
            origin: RootOrigin::Environment,
        }))
    }

    fn name(&self) -> &str {
        "environment"
    }
}

pub fn split_path_list(list: &str) -> Vec<PathBuf> {
    let separator = if cfg!(windows) { ';' } else { ':' };
    list.split(separator)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Result of a root collection pass
#[derive(Debug, Default, Clone)]
pub struct CollectReport {
    /// Roots in the final list
    pub total_roots: usize,
    /// Entries that did not exist on disk
    pub skipped: usize,
    /// Entries dropped because their canonical path was already present
    pub duplicates: usize,
    /// Root counts per origin tag
    pub by_origin: HashMap<String, usize>,
    /// Time taken for the collection
    pub duration: Duration,
}

/// Roots plus collection statistics
#[derive(Debug, Clone)]
pub struct CollectedRoots {
    pub roots: Vec<ClasspathRoot>,
    pub report: CollectReport,
}

/// Expands discoverer output into a flat, deduplicated root list
/// (breadth-first through manifest references, first-discovery order).
pub struct RootCollector {
    discoverers: Vec<Box<dyn RootDiscoverer>>,
}

impl RootCollector {
    pub fn new() -> Self {
        Self {
            discoverers: Vec::new(),
        }
    }

    /// Add a discoverer
    pub fn add_discoverer(mut self, discoverer: Box<dyn RootDiscoverer>) -> Self {
        self.discoverers.push(discoverer);
        self
    }

    /// Add multiple discoverers
    pub fn with_discoverers(
        mut self,
        discoverers: impl IntoIterator<Item = Box<dyn RootDiscoverer>>,
    ) -> Self {
        self.discoverers.extend(discoverers);
        self
    }

    /// Collect all roots.
    ///
    /// Missing entries are skipped, not errors: a classpath routinely lists
    /// locations that do not exist. The canonical-path visited set guards
    /// both repeated entries and manifest reference cycles.
    pub fn collect(&self) -> CollectedRoots {
        let start = Instant::now();
        let mut report = CollectReport::default();
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut roots: Vec<ClasspathRoot> = Vec::new();
        let mut queue: VecDeque<RawEntry> = VecDeque::new();

        for discoverer in &self.discoverers {
            debug!("collecting entries from discoverer: {}", discoverer.name());
            queue.extend(discoverer.discover());
        }

        while let Some(entry) = queue.pop_front() {
            let Ok(canonical) = entry.path.canonicalize() else {
                debug!("skipping missing classpath entry {:?}", entry.path);
                report.skipped += 1;
                continue;
            };
            if !seen.insert(canonical.clone()) {
                report.duplicates += 1;
                continue;
            }

            let kind = classify(&canonical);
            if kind == RootKind::Archive {
                match manifest::read_class_path(&canonical) {
                    Ok(referenced) => {
                        for path in referenced {
                            queue.push_back(RawEntry {
                                path,
                                origin: RootOrigin::Manifest {
                                    referenced_by: canonical.clone(),
                                },
                            });
                        }
                    }
                    Err(e) => warn!("unreadable manifest in {:?}: {e}", canonical),
                }
            }

            *report
                .by_origin
                .entry(entry.origin.source_type().to_string())
                .or_default() += 1;
            roots.push(ClasspathRoot::new(canonical, kind, entry.origin));
        }

        report.total_roots = roots.len();
        report.duration = start.elapsed();
        info!(
            "collected {} classpath roots ({} skipped, {} duplicate) in {:?}",
            report.total_roots, report.skipped, report.duplicates, report.duration
        );

        CollectedRoots { roots, report }
    }
}

impl Default for RootCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(canonical: &Path) -> RootKind {
    if canonical.is_dir() {
        RootKind::Directory
    } else {
        // Anything else on a classpath is treated as an archive; a file that
        // is not actually a ZIP surfaces as an error at scan time
        RootKind::Archive
    }
}
