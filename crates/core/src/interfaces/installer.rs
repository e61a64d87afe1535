//! Dependency installer interface

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A named component at a concrete version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Fetches and unpacks a dependency into a destination directory.
///
/// Implementations own their retry policy; failures are reported verbatim to
/// the caller.
pub trait Installer {
    fn install_dependency(&self, dependency: &Dependency, destination: &Path) -> anyhow::Result<()>;
}
