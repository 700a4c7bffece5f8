//! Aggregation semantics: deduplication, stable order, idempotence.

mod common;

use classglob_core::{ExplicitDiscoverer, PatternResolver, RootCollector};
use common::write_jar;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn resolver_over(entries: Vec<PathBuf>) -> PatternResolver {
    let collector =
        RootCollector::new().add_discoverer(Box::new(ExplicitDiscoverer::new(entries)));
    PatternResolver::from_collector(&collector)
}

#[test]
fn repeated_resolution_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("org/example")).unwrap();
    fs::write(dir.path().join("org/example/A.class"), b"x").unwrap();
    fs::write(dir.path().join("org/example/B.class"), b"x").unwrap();
    let jar = dir.path().join("dep.jar");
    write_jar(&jar, None, &["org/example/C.class"]);

    let resolver = resolver_over(vec![dir.path().to_path_buf(), jar]);

    let first = resolver.resolve("**/*.class").unwrap();
    let second = resolver.resolve("**/*.class").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn results_are_sorted_by_uri() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("z")).unwrap();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("z/Z.class"), b"x").unwrap();
    fs::write(dir.path().join("a/A.class"), b"x").unwrap();

    let resolver = resolver_over(vec![dir.path().to_path_buf()]);
    let found = resolver.resolve("**/*.class").unwrap();
    let uris: Vec<String> = found.iter().map(|r| r.uri()).collect();

    let mut sorted = uris.clone();
    sorted.sort();
    assert_eq!(uris, sorted);
}

#[test]
fn resource_reachable_via_two_roots_appears_once() {
    let dir = tempdir().unwrap();
    let classes = dir.path().join("classes");
    fs::create_dir_all(classes.join("org")).unwrap();
    fs::write(classes.join("org/A.class"), b"x").unwrap();

    // Same directory listed explicitly and referenced by a manifest
    let app = dir.path().join("app.jar");
    write_jar(&app, Some(&classes.display().to_string()), &[]);

    let resolver = resolver_over(vec![classes.clone(), app]);
    assert_eq!(resolver.roots().len(), 2);

    let found = resolver.resolve("**/*.class").unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn nested_directory_roots_yield_one_resource() {
    let dir = tempdir().unwrap();
    let outer = dir.path().join("classes");
    let inner = outer.join("org");
    fs::create_dir_all(&inner).unwrap();
    fs::write(inner.join("A.class"), b"x").unwrap();

    // The file is reachable from both roots under different relative paths,
    // but canonicalizes to one location
    let resolver = resolver_over(vec![outer, inner]);
    assert_eq!(resolver.roots().len(), 2);

    let found = resolver.resolve("**/*.class").unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn duplicate_classpath_entries_collapse() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("dep.jar");
    write_jar(&jar, None, &["org/example/Dep.class"]);

    let resolver = resolver_over(vec![jar.clone(), jar]);
    assert_eq!(resolver.roots().len(), 1);
    assert_eq!(resolver.resolve("**/*.class").unwrap().len(), 1);
}

#[test]
fn literal_pattern_finds_one_resource_across_roots() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("org/example")).unwrap();
    fs::write(dir.path().join("org/example/Config.xml"), b"<x/>").unwrap();
    let jar = dir.path().join("dep.jar");
    write_jar(&jar, None, &["org/example/Other.class"]);

    let resolver = resolver_over(vec![dir.path().to_path_buf(), jar]);
    let found = resolver.resolve("org/example/Config.xml").unwrap();
    assert_eq!(found.len(), 1);

    let missing = resolver.resolve("org/example/Missing.xml").unwrap();
    assert!(missing.is_empty());
}

#[test]
fn invalid_root_aborts_resolution() {
    let dir = tempdir().unwrap();
    let fake = dir.path().join("broken.jar");
    fs::write(&fake, b"definitely not a zip").unwrap();

    let resolver = resolver_over(vec![fake]);
    assert!(resolver.resolve("**/*.class").is_err());
}
