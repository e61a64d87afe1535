//! Version catalogs backing [`CatalogProvider`]

use crate::{
    error::{Error, Result},
    interfaces::{CatalogProvider, Dependency},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Dependency manifest loaded from JSON:
///
/// ```json
/// { "dependencies": [ { "name": "dotnet-framework", "version": "2.1.4" } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse manifest {}: {e}", path.display()))
        })?;
        Ok(manifest)
    }
}

impl CatalogProvider for Manifest {
    fn all_versions(&self, component: &str) -> Vec<String> {
        let mut versions: Vec<String> = Vec::new();
        for dep in self.dependencies.iter().filter(|d| d.name == component) {
            if !versions.contains(&dep.version) {
                versions.push(dep.version.clone());
            }
        }
        versions
    }
}

/// In-memory catalog, mostly for fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    components: BTreeMap<String, Vec<String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions<I, S>(mut self, component: &str, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.components.entry(component.to_string()).or_default();
        for version in versions {
            let version = version.into();
            if !entry.contains(&version) {
                entry.push(version);
            }
        }
        self
    }
}

impl CatalogProvider for StaticCatalog {
    fn all_versions(&self, component: &str) -> Vec<String> {
        self.components.get(component).cloned().unwrap_or_default()
    }
}

/// Highest catalog version of `component` on a version line such as `2.1.x`
pub fn first_of_version_line(
    catalog: &dyn CatalogProvider,
    component: &str,
    line: &str,
) -> Result<String> {
    let versions = catalog.find_matching_versions(component, line)?;
    versions
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoMatchingVersion {
            constraint: line.to_string(),
            available: 0,
        })
}
