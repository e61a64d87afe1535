//! Framework version requirements and their installation

mod installer;

pub use installer::FrameworkInstaller;

use crate::{
    error::Result,
    interfaces::CatalogProvider,
    project::{Project, RuntimeConfig},
    version,
};
use tracing::{debug, info, warn};

/// Works out which framework versions an application needs.
///
/// Published trees pin the version in their runtime config; unpublished ones
/// leave a restored package directory per version under the deps dir.
pub struct FrameworkDetector<'a> {
    project: &'a Project,
    catalog: &'a dyn CatalogProvider,
}

impl<'a> FrameworkDetector<'a> {
    pub fn new(project: &'a Project, catalog: &'a dyn CatalogProvider) -> Self {
        Self { project, catalog }
    }

    pub fn required_versions(&self) -> Result<Vec<String>> {
        let versions = match self.project.runtime_config_file()? {
            Some(path) => {
                debug!("Reading framework version from {:?}", path);
                self.versions_from_runtime_config(&RuntimeConfig::load(&path)?)?
            }
            None => self.restored_versions()?,
        };

        if !versions.is_empty() {
            info!("Required dotnetframework versions: {:?}", versions);
        }
        Ok(versions)
    }

    fn versions_from_runtime_config(&self, config: &RuntimeConfig) -> Result<Vec<String>> {
        let Some(version) = config.framework_version() else {
            return Ok(Vec::new());
        };
        let component = self.project.layout().framework_component.as_str();

        if config.apply_patches() {
            let constraint = version::patch_wildcard(version)?;
            let resolved = self.catalog.find_matching_version(component, &constraint)?;
            debug!("Resolved {} ({}) to {}", version, constraint, resolved);
            return Ok(vec![resolved]);
        }

        // Patches disabled: the pinned version is used as-is and left for
        // the installer to accept or reject.
        if !self.catalog.all_versions(component).iter().any(|v| v == version) {
            warn!("{} {} is not listed in the catalog", component, version);
        }
        Ok(vec![version.to_string()])
    }

    fn restored_versions(&self) -> Result<Vec<String>> {
        let dir = self.project.layout().restored_versions_path(self.project.dep_dir());
        if !dir.is_dir() {
            debug!("No restored framework packages at {:?}", dir);
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                versions.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        versions.sort();
        Ok(versions)
    }
}
