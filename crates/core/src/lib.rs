//! Classpath-style resource resolution.
//!
//! Expands classpath roots (directories, archives, and the entries of archive
//! manifests' `Class-Path` attributes, relative or absolute) and resolves
//! Ant-style glob patterns against them. Results are deduplicated and
//! returned in a stable order.

pub mod collector;
pub mod containment;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod model;
pub mod pattern;
pub mod resolver;
pub mod scanner;

pub use collector::{
    CollectReport, CollectedRoots, EnvDiscoverer, ExplicitDiscoverer, RootCollector,
    RootDiscoverer,
};
pub use error::{ClassglobError, Result};
pub use model::{ClasspathRoot, Resource, ResourceLocation, RootKind, RootOrigin};
pub use pattern::PathPattern;
pub use resolver::PatternResolver;
