use crate::{
    error::Result,
    interfaces::{Dependency, Installer},
    project::Project,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Installs missing shared framework versions through an [`Installer`].
///
/// Versions already present under the shared framework directory are
/// skipped, so running this twice is a no-op the second time.
pub struct FrameworkInstaller<'a> {
    project: &'a Project,
    installer: &'a dyn Installer,
}

impl<'a> FrameworkInstaller<'a> {
    pub fn new(project: &'a Project, installer: &'a dyn Installer) -> Self {
        Self { project, installer }
    }

    pub fn framework_dir(&self) -> PathBuf {
        self.project.layout().framework_path(self.project.dep_dir())
    }

    pub fn is_installed(&self, version: &str) -> Result<bool> {
        let path = self.framework_dir().join(version);
        if path.try_exists()? {
            info!("Using dotnet framework installed in {}", path.display());
            return Ok(true);
        }
        Ok(false)
    }

    /// Install every version not already present. Returns what was installed.
    pub fn install(&self, versions: &[String]) -> Result<Vec<Dependency>> {
        let layout = self.project.layout();
        let destination = layout.runtime_path(self.project.dep_dir());

        let mut installed = Vec::new();
        for version in versions {
            if self.is_installed(version)? {
                continue;
            }
            let dependency = Dependency::new(layout.framework_component.as_str(), version.as_str());
            debug!("Installing {} into {:?}", dependency, destination);
            self.installer.install_dependency(&dependency, &destination)?;
            installed.push(dependency);
        }
        Ok(installed)
    }
}
