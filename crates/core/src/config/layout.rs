//! On-disk layout of build roots, staging directories and runtime installs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names, suffixes and directory conventions the engine relies on.
///
/// Every field has a default matching the standard .NET Core buildpack
/// layout, so a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Layout {
    /// Build descriptor extensions, including the leading dot
    pub project_extensions: Vec<String>,
    /// Directory name reserved for buildpack bookkeeping, never scanned
    pub reserved_dir: String,
    pub runtime_config_suffix: String,
    pub library_suffix: String,
    pub deployment_file: String,
    /// Framework-dependent publish output, under the deps dir
    pub publish_dir: String,
    /// Restored framework package versions, under the deps dir
    pub restored_packages_dir: PathBuf,
    /// Runtime install root, under the deps dir
    pub runtime_dir: String,
    /// Shared framework installs, under the runtime install root
    pub shared_framework_dir: PathBuf,
    /// Catalog component name for the framework
    pub framework_component: String,
    pub home_token: String,
    pub deps_token: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            project_extensions: vec![
                ".csproj".to_string(),
                ".vbproj".to_string(),
                ".fsproj".to_string(),
            ],
            reserved_dir: ".cloudfoundry".to_string(),
            runtime_config_suffix: ".runtimeconfig.json".to_string(),
            library_suffix: ".dll".to_string(),
            deployment_file: ".deployment".to_string(),
            publish_dir: "dotnet_publish".to_string(),
            restored_packages_dir: PathBuf::from(".nuget/packages/microsoft.netcore.app"),
            runtime_dir: "dotnet".to_string(),
            shared_framework_dir: PathBuf::from("shared/Microsoft.NETCore.App"),
            framework_component: "dotnet-framework".to_string(),
            home_token: "${HOME}".to_string(),
            deps_token: "${DEPS_DIR}".to_string(),
        }
    }
}

impl Layout {
    pub fn is_project_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.project_extensions
            .iter()
            .any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
    }

    pub fn is_runtime_config_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(self.runtime_config_suffix.as_str()))
    }

    /// Glob pattern matching runtime config files directly under `build_dir`
    pub fn runtime_config_pattern(&self, build_dir: &Path) -> String {
        let escaped = glob::Pattern::escape(&build_dir.to_string_lossy());
        format!("{}/*{}", escaped.trim_end_matches('/'), self.runtime_config_suffix)
    }

    pub fn deployment_path(&self, build_dir: &Path) -> PathBuf {
        build_dir.join(&self.deployment_file)
    }

    pub fn publish_path(&self, dep_dir: &Path) -> PathBuf {
        dep_dir.join(&self.publish_dir)
    }

    pub fn restored_versions_path(&self, dep_dir: &Path) -> PathBuf {
        dep_dir.join(&self.restored_packages_dir)
    }

    /// Destination handed to the installer
    pub fn runtime_path(&self, dep_dir: &Path) -> PathBuf {
        dep_dir.join(&self.runtime_dir)
    }

    pub fn framework_path(&self, dep_dir: &Path) -> PathBuf {
        self.runtime_path(dep_dir).join(&self.shared_framework_dir)
    }

    /// Launch-time root of a published app
    pub fn published_root(&self) -> String {
        self.home_token.clone()
    }

    /// Launch-time root of framework-dependent publish output
    pub fn unpublished_root(&self, deps_idx: &str) -> String {
        format!("{}/{}/{}", self.deps_token, deps_idx, self.publish_dir)
    }
}
