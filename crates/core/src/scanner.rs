//! Per-root resource scanning: directory walks and archive entry listings.

use crate::containment::contained_path;
use crate::error::Result;
use crate::model::{ClasspathRoot, Resource, RootKind};
use crate::pattern::PathPattern;
use std::fs::File;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;
use zip::ZipArchive;
use zip::result::ZipError;

/// Scan one root for resources matching `pattern`.
///
/// An unreadable root (vanished directory, corrupt archive) is an error;
/// the aggregator decides policy.
pub fn scan_root(root: &ClasspathRoot, pattern: &PathPattern) -> Result<Vec<Resource>> {
    match root.kind {
        RootKind::Directory => scan_directory(&root.path, pattern),
        RootKind::Archive => scan_archive(&root.path, pattern),
    }
}

fn scan_directory(root: &Path, pattern: &PathPattern) -> Result<Vec<Resource>> {
    // Literal patterns are a single existence check, no walk
    if pattern.is_literal() {
        let candidate = root.join(pattern.as_str());
        return Ok(contained_path(&candidate, root)
            .filter(|path| path.is_file())
            .map(|path| Resource::file(path, pattern.as_str()))
            .into_iter()
            .collect());
    }

    // Narrow the walk to the literal prefix of the pattern
    let base = root.join(pattern.root_dir());
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&base).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative.to_string_lossy().into_owned();
        if !pattern.matches(&relative) {
            continue;
        }
        match contained_path(entry.path(), root) {
            Some(canonical) => found.push(Resource::file(canonical, relative)),
            None => debug!("excluding {:?}: escapes root {:?}", entry.path(), root),
        }
    }
    trace!("{} directory matches under {:?}", found.len(), root);
    Ok(found)
}

fn scan_archive(archive_path: &Path, pattern: &PathPattern) -> Result<Vec<Resource>> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    // Literal patterns go through the central directory index
    if pattern.is_literal() {
        return Ok(match archive.by_name(pattern.as_str()) {
            Ok(entry) if !entry.is_dir() => vec![Resource::archive_entry(
                archive_path.to_path_buf(),
                entry.name().to_string(),
            )],
            Ok(_) => Vec::new(),
            Err(ZipError::FileNotFound) => Vec::new(),
            Err(e) => return Err(e.into()),
        });
    }

    // Entry names are archive-relative and `/`-separated already; they
    // cannot escape the archive, so no containment check is needed.
    let found: Vec<Resource> = archive
        .file_names()
        .filter(|name| !name.ends_with('/'))
        .filter(|name| pattern.matches(name))
        .map(|name| Resource::archive_entry(archive_path.to_path_buf(), name.to_string()))
        .collect();
    trace!("{} archive matches in {:?}", found.len(), archive_path);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ResourceLocation, RootOrigin};
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn dir_root(path: &Path) -> ClasspathRoot {
        ClasspathRoot::new(
            path.canonicalize().unwrap(),
            RootKind::Directory,
            RootOrigin::Explicit,
        )
    }

    fn compile(pattern: &str) -> PathPattern {
        PathPattern::compile(pattern).unwrap()
    }

    #[test]
    fn test_scan_directory_with_empty_root_pattern() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("org/example")).unwrap();
        fs::write(dir.path().join("Top.class"), b"x").unwrap();
        fs::write(dir.path().join("org/example/Deep.class"), b"x").unwrap();
        fs::write(dir.path().join("org/example/notes.txt"), b"x").unwrap();

        let root = dir_root(dir.path());
        let found = scan_root(&root, &compile("**/*.class")).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_scan_directory_narrows_to_pattern_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("org")).unwrap();
        fs::create_dir_all(dir.path().join("com")).unwrap();
        fs::write(dir.path().join("org/A.class"), b"x").unwrap();
        fs::write(dir.path().join("com/B.class"), b"x").unwrap();

        let root = dir_root(dir.path());
        let found = scan_root(&root, &compile("org/**/*.class")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relative_path(), "org/A.class");
        match &found[0].location {
            ResourceLocation::File { path } => assert!(path.ends_with("org/A.class")),
            other => panic!("expected file resource, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_directory_literal_lookup() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("org")).unwrap();
        fs::write(dir.path().join("org/A.class"), b"x").unwrap();

        let root = dir_root(dir.path());
        assert_eq!(scan_root(&root, &compile("org/A.class")).unwrap().len(), 1);
        assert!(scan_root(&root, &compile("org/B.class")).unwrap().is_empty());
        // A directory is not a resource
        assert!(scan_root(&root, &compile("org")).unwrap().is_empty());
    }

    #[test]
    fn test_scan_archive() {
        let dir = tempdir().unwrap();
        let jar_path = dir.path().join("dep.jar");
        let file = File::create(&jar_path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        zip.add_directory("org/example/", options).unwrap();
        zip.start_file("org/example/Dep.class", options).unwrap();
        zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
        zip.start_file("META-INF/MANIFEST.MF", options).unwrap();
        zip.write_all(b"Manifest-Version: 1.0\r\n\r\n").unwrap();
        zip.finish().unwrap();

        let root = ClasspathRoot::new(
            jar_path.canonicalize().unwrap(),
            RootKind::Archive,
            RootOrigin::Explicit,
        );

        let all = scan_root(&root, &compile("**/*.class")).unwrap();
        assert_eq!(all.len(), 1);

        let prefixed = scan_root(&root, &compile("org/**/*.class")).unwrap();
        assert_eq!(prefixed, all);

        let literal = scan_root(&root, &compile("org/example/Dep.class")).unwrap();
        assert_eq!(literal, all);
    }

    #[test]
    fn test_scan_corrupt_archive_is_an_error() {
        let dir = tempdir().unwrap();
        let fake = dir.path().join("fake.jar");
        fs::write(&fake, b"not a zip at all").unwrap();

        let root = ClasspathRoot::new(
            fake.canonicalize().unwrap(),
            RootKind::Archive,
            RootOrigin::Explicit,
        );
        assert!(scan_root(&root, &compile("**/*.class")).is_err());
    }
}
