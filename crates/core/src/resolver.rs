//! Pattern resolution across all collected classpath roots.

use crate::collector::RootCollector;
use crate::error::Result;
use crate::model::{ClasspathRoot, Resource};
use crate::pattern::PathPattern;
use crate::scanner;
use indexmap::IndexSet;
use tracing::{debug, info};

/// Resolves glob patterns against a fixed set of classpath roots.
///
/// Results are deduplicated on canonical location and sorted by URI, so
/// repeated calls over an unchanged tree return identical vectors.
pub struct PatternResolver {
    roots: Vec<ClasspathRoot>,
}

impl PatternResolver {
    pub fn new(roots: Vec<ClasspathRoot>) -> Self {
        Self { roots }
    }

    /// Collect roots with `collector` and build a resolver over them
    pub fn from_collector(collector: &RootCollector) -> Self {
        Self::new(collector.collect().roots)
    }

    pub fn roots(&self) -> &[ClasspathRoot] {
        &self.roots
    }

    /// All resources matching `pattern`, across every root.
    ///
    /// A root that fails to scan aborts the resolution; there are no partial
    /// results.
    pub fn resolve(&self, pattern: &str) -> Result<Vec<Resource>> {
        let pattern = PathPattern::compile(pattern)?;

        let mut merged: IndexSet<Resource> = IndexSet::new();
        for root in &self.roots {
            let found = scanner::scan_root(root, &pattern)?;
            debug!("{} matches under {:?}", found.len(), root.path);
            merged.extend(found);
        }

        let mut resources: Vec<Resource> = merged.into_iter().collect();
        resources.sort_by_cached_key(|resource| resource.uri());
        info!(
            "resolved {} resources for pattern {}",
            resources.len(),
            pattern.as_str()
        );
        Ok(resources)
    }
}
