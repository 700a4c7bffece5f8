use classglob_core::{EnvDiscoverer, ExplicitDiscoverer, PatternResolver, RootCollector};
use tracing::debug;

/// Build a resolver from the `--classpath` flag, falling back to the
/// CLASSPATH environment variable, then the current directory.
pub fn build_resolver(flag: Option<&str>) -> PatternResolver {
    let collector = match flag {
        Some(list) => RootCollector::new()
            .add_discoverer(Box::new(ExplicitDiscoverer::from_path_list(list))),
        None if std::env::var_os("CLASSPATH").is_some() => {
            debug!("no --classpath given, using CLASSPATH environment variable");
            RootCollector::new().add_discoverer(Box::new(EnvDiscoverer::new("CLASSPATH")))
        }
        None => {
            debug!("no classpath configured, using current directory");
            RootCollector::new()
                .add_discoverer(Box::new(ExplicitDiscoverer::new(vec![".".into()])))
        }
    };
    PatternResolver::from_collector(&collector)
}
