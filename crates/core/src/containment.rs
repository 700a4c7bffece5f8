//! Containment filter for candidates discovered under a directory root.
//!
//! Roots may legitimately live anywhere on the filesystem (manifest
//! Class-Path entries are allowed to be absolute), so containment is judged
//! against the root the candidate was found under, never against the working
//! directory.

use std::path::{Path, PathBuf};

/// Canonicalize `candidate` and return it if it really lives under
/// `canonical_root`.
///
/// The comparison is component-wise (`Path::starts_with`), so `/opt/libs-x`
/// is not inside `/opt/libs`. A candidate that escapes the root through a
/// symlink, or vanished between the walk and this check, yields `None`.
pub fn contained_path(candidate: &Path, canonical_root: &Path) -> Option<PathBuf> {
    let canonical = candidate.canonicalize().ok()?;
    if canonical.starts_with(canonical_root) {
        Some(canonical)
    } else {
        None
    }
}
