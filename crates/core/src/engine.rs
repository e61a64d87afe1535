//! Engine that ties project location, framework resolution and start
//! command synthesis together for one build

use crate::{
    command::StartCommand,
    config::Config,
    error::Result,
    framework::{FrameworkDetector, FrameworkInstaller},
    interfaces::{CatalogProvider, Dependency, Installer},
    project::Project,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything the engine decided about a build root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub main_path: Option<PathBuf>,
    pub published: bool,
    pub fsharp: bool,
    pub required_versions: Vec<String>,
    pub start_command: Option<String>,
}

pub struct LaunchEngine {
    project: Project,
}

impl LaunchEngine {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn with_config(build_dir: &Path, dep_dir: &Path, deps_idx: &str, config: &Config) -> Self {
        let project = Project::new(build_dir, dep_dir, deps_idx).with_layout(config.layout.clone());
        Self::new(project)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn main_path(&self) -> Result<Option<PathBuf>> {
        self.project.main_path()
    }

    pub fn required_versions(&self, catalog: &dyn CatalogProvider) -> Result<Vec<String>> {
        FrameworkDetector::new(&self.project, catalog).required_versions()
    }

    /// Detect required framework versions and install the missing ones
    pub fn install_frameworks(
        &self,
        catalog: &dyn CatalogProvider,
        installer: &dyn Installer,
    ) -> Result<Vec<Dependency>> {
        let versions = self.required_versions(catalog)?;
        if versions.is_empty() {
            debug!("No framework versions required");
            return Ok(Vec::new());
        }
        let installed = FrameworkInstaller::new(&self.project, installer).install(&versions)?;
        info!("Installed {} of {} framework versions", installed.len(), versions.len());
        Ok(installed)
    }

    pub fn start_command(&self) -> Result<Option<String>> {
        StartCommand::new(&self.project).start_command()
    }

    pub fn plan(&self, catalog: &dyn CatalogProvider) -> Result<LaunchPlan> {
        Ok(LaunchPlan {
            main_path: self.main_path()?,
            published: self.project.is_published()?,
            fsharp: self.project.is_fsharp()?,
            required_versions: self.required_versions(catalog)?,
            start_command: self.start_command()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plan_for_published_app() {
        let build_dir = TempDir::new().unwrap();
        let deps_dir = TempDir::new().unwrap();
        fs::write(
            build_dir.path().join("web.runtimeconfig.json"),
            r#"{ "runtimeOptions": { "framework": { "name": "Microsoft.NETCore.App", "version": "2.1.0" } } }"#,
        )
        .unwrap();
        fs::write(build_dir.path().join("web.dll"), "").unwrap();
        let catalog = StaticCatalog::new().with_versions("dotnet-framework", ["2.1.0", "2.1.6"]);

        let engine = LaunchEngine::with_config(build_dir.path(), deps_dir.path(), "0", &Config::default());
        let plan = engine.plan(&catalog).unwrap();

        assert_eq!(
            plan,
            LaunchPlan {
                main_path: Some(build_dir.path().join("web.runtimeconfig.json")),
                published: true,
                fsharp: false,
                required_versions: vec!["2.1.6".to_string()],
                start_command: Some("${HOME}/web.dll".to_string()),
            }
        );
    }

    #[test]
    fn test_plan_for_empty_tree() {
        let build_dir = TempDir::new().unwrap();
        let deps_dir = TempDir::new().unwrap();
        let engine = LaunchEngine::new(Project::new(build_dir.path(), deps_dir.path(), "0"));

        let plan = engine.plan(&StaticCatalog::new()).unwrap();
        assert_eq!(plan.main_path, None);
        assert!(plan.required_versions.is_empty());
        assert_eq!(plan.start_command, None);
    }

    #[test]
    fn test_custom_layout_from_config() {
        let build_dir = TempDir::new().unwrap();
        let deps_dir = TempDir::new().unwrap();
        fs::write(build_dir.path().join("api.fsproj"), "<Project></Project>").unwrap();
        fs::create_dir_all(deps_dir.path().join("out")).unwrap();
        fs::write(deps_dir.path().join("out").join("api.dll"), "").unwrap();

        let mut config = Config::default();
        config.layout.publish_dir = "out".to_string();
        let engine = LaunchEngine::with_config(build_dir.path(), deps_dir.path(), "3", &config);

        assert!(engine.project().is_fsharp().unwrap());
        assert_eq!(
            engine.start_command().unwrap(),
            Some("${DEPS_DIR}/3/out/api.dll".to_string())
        );
    }
}
