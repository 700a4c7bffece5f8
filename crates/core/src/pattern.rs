//! Ant-style glob patterns over `/`-separated resource paths.
//!
//! `?` matches one character within a segment, `*` any run of characters
//! within a segment, `**` any number of whole segments.

use crate::error::{ClassglobError, Result};
use regex::Regex;

/// A compiled classpath resource pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    root_dir: String,
    // None for literal patterns, which compare by equality
    regex: Option<Regex>,
}

impl PathPattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        let root_dir = literal_root(pattern);
        let regex = if has_wildcard(pattern) {
            let expr = translate(pattern);
            Some(
                Regex::new(&expr).map_err(|e| ClassglobError::Pattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?,
            )
        } else {
            None
        };
        Ok(Self {
            source: pattern.to_string(),
            root_dir,
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Longest literal directory prefix before the first wildcard, with its
    /// trailing slash. Used to narrow directory walks; empty for empty-root
    /// patterns such as `**/*.class`.
    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    /// Pattern without wildcards: a direct path lookup
    pub fn is_literal(&self) -> bool {
        self.regex.is_none()
    }

    /// Match a root-relative candidate path. Backslash separators are
    /// normalized before matching, so Windows walk output behaves.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = if candidate.contains('\\') {
            candidate.replace('\\', "/")
        } else {
            candidate.to_string()
        };
        match &self.regex {
            Some(regex) => regex.is_match(&candidate),
            None => candidate == self.source,
        }
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

fn literal_root(pattern: &str) -> String {
    let wildcard = pattern.find(['*', '?']).unwrap_or(pattern.len());
    match pattern[..wildcard].rfind('/') {
        Some(idx) => pattern[..=idx].to_string(),
        None => String::new(),
    }
}

/// Translate a glob into an anchored regex. `**` is segment-aware: it may
/// consume nothing, so `**/*.class` matches `Foo.class` and `a/**` matches
/// `a` itself.
fn translate(pattern: &str) -> String {
    let segments: Vec<&str> = pattern.split('/').collect();
    let last = segments.len() - 1;

    let mut expr = String::from("^");
    let mut pending_sep = false;
    for (i, segment) in segments.iter().enumerate() {
        if *segment == "**" {
            if i == last {
                if pending_sep {
                    expr.push_str("(?:/.*)?");
                } else {
                    expr.push_str(".*");
                }
            } else {
                if pending_sep {
                    expr.push('/');
                }
                expr.push_str("(?:.*/)?");
            }
            pending_sep = false;
            continue;
        }

        if pending_sep {
            expr.push('/');
        }
        for ch in segment.chars() {
            match ch {
                '*' => expr.push_str("[^/]*"),
                '?' => expr.push_str("[^/]"),
                _ => expr.push_str(&regex::escape(&ch.to_string())),
            }
        }
        pending_sep = true;
    }
    expr.push('$');
    expr
}
