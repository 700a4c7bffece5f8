use classglob_core::{PatternResolver, RootKind, RootOrigin};
use tabled::{Table, Tabled};

/// A terminal-optimized view of a classpath root
#[derive(Tabled)]
struct RootView {
    #[tabled(rename = "PATH")]
    path: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "ORIGIN")]
    origin: String,
}

pub fn run(resolver: &PatternResolver, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolver.roots())?);
        return Ok(());
    }

    if resolver.roots().is_empty() {
        println!("no classpath roots collected");
        return Ok(());
    }

    let views: Vec<RootView> = resolver
        .roots()
        .iter()
        .map(|root| RootView {
            path: root.path.display().to_string(),
            kind: match root.kind {
                RootKind::Directory => "dir".to_string(),
                RootKind::Archive => "archive".to_string(),
            },
            origin: match &root.origin {
                RootOrigin::Manifest { referenced_by } => {
                    format!("manifest ({})", referenced_by.display())
                }
                other => other.source_type().to_string(),
            },
        })
        .collect();

    println!("{}", Table::new(views));
    Ok(())
}
