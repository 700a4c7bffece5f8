//! Two-pattern probe: resolve the same suffix with an empty root and with a
//! package prefix, and compare the counts.
//!
//! The prefixed pattern can only ever match a subset of what the empty-root
//! pattern matches, so a smaller empty-root count means whole roots (most
//! likely manifest Class-Path entries) were dropped from the search.

use classglob_core::{PatternResolver, Resource};
use serde::Serialize;

const SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ProbeVerdict {
    pub empty_pattern: String,
    pub empty_count: usize,
    pub prefixed_pattern: String,
    pub prefixed_count: usize,
    pub tolerance: usize,
    pub bug_observed: bool,
}

impl ProbeVerdict {
    fn new(
        empty_pattern: String,
        empty_count: usize,
        prefixed_pattern: String,
        prefixed_count: usize,
        tolerance: usize,
    ) -> Self {
        Self {
            empty_pattern,
            empty_count,
            prefixed_pattern,
            prefixed_count,
            tolerance,
            bug_observed: empty_count + tolerance < prefixed_count,
        }
    }

    pub fn bug_observed(&self) -> bool {
        self.bug_observed
    }
}

pub fn run(
    resolver: &PatternResolver,
    prefix: &str,
    suffix: &str,
    tolerance: usize,
    json: bool,
) -> Result<ProbeVerdict, Box<dyn std::error::Error>> {
    let empty_pattern = format!("**/{suffix}");
    let prefixed_pattern = format!("{prefix}/**/{suffix}");

    if json {
        let empty = resolver.resolve(&empty_pattern)?;
        let prefixed = resolver.resolve(&prefixed_pattern)?;
        let verdict = ProbeVerdict::new(
            empty_pattern,
            empty.len(),
            prefixed_pattern,
            prefixed.len(),
            tolerance,
        );
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(verdict);
    }

    println!("{}", "=".repeat(70));
    println!("Probing classpath pattern resolution across {} roots", resolver.roots().len());
    println!("{}", "=".repeat(70));
    println!();

    println!("TEST 1: empty-root pattern");
    println!("Pattern: {empty_pattern}");
    println!("{}", "-".repeat(70));
    let empty = resolver.resolve(&empty_pattern)?;
    println!("Found: {} resources", empty.len());
    print_sample(&empty);
    println!();

    println!("TEST 2: package-prefix pattern");
    println!("Pattern: {prefixed_pattern}");
    println!("{}", "-".repeat(70));
    let prefixed = resolver.resolve(&prefixed_pattern)?;
    println!("Found: {} resources", prefixed.len());
    print_sample(&prefixed);
    println!();

    println!("SUMMARY:");
    println!("{}", "-".repeat(70));
    println!("Empty-root pattern ({empty_pattern}): {} resources", empty.len());
    println!(
        "Package-prefix pattern ({prefixed_pattern}): {} resources",
        prefixed.len()
    );
    println!();

    let verdict = ProbeVerdict::new(
        empty_pattern,
        empty.len(),
        prefixed_pattern,
        prefixed.len(),
        tolerance,
    );

    if verdict.bug_observed() {
        println!("BUG OBSERVED!");
        println!("The empty-root pattern found fewer resources than the package-prefix");
        println!("pattern; some roots were excluded from the empty-root search.");
    } else {
        println!("No discrepancy: the empty-root result covers the package-prefix result.");
    }

    Ok(verdict)
}

fn print_sample(resources: &[Resource]) {
    if resources.is_empty() {
        return;
    }
    println!();
    println!("Sample resources found:");
    for resource in resources.iter().take(SAMPLE_LIMIT) {
        println!("  - {}", resource.uri());
    }
}
