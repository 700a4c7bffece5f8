use classglob_core::PatternResolver;

pub fn run(
    resolver: &PatternResolver,
    pattern: &str,
    json: bool,
    count: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resources = resolver.resolve(pattern)?;

    if count {
        println!("{}", resources.len());
    } else if json {
        let uris: Vec<String> = resources.iter().map(|r| r.uri()).collect();
        println!("{}", serde_json::to_string_pretty(&uris)?);
    } else {
        for resource in &resources {
            println!("{}", resource.uri());
        }
    }
    Ok(())
}
