//! Locating the application project inside a build root
//!
//! The main artifact is chosen in trust order: a generated runtime config,
//! then the only build descriptor, then the one named by `.deployment`.
//! Several descriptors without a hint is an error, never a guess.

mod deployment;
pub mod descriptor;
mod runtime_config;

pub use deployment::DeploymentHint;
pub use runtime_config::{Framework, RuntimeConfig, RuntimeOptions};

use crate::{
    config::Layout,
    error::{Error, Result},
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Project {
    build_dir: PathBuf,
    dep_dir: PathBuf,
    deps_idx: String,
    layout: Layout,
}

impl Project {
    pub fn new(
        build_dir: impl Into<PathBuf>,
        dep_dir: impl Into<PathBuf>,
        deps_idx: impl Into<String>,
    ) -> Self {
        Self {
            build_dir: build_dir.into(),
            dep_dir: dep_dir.into(),
            deps_idx: deps_idx.into(),
            layout: Layout::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn dep_dir(&self) -> &Path {
        &self.dep_dir
    }

    pub fn deps_idx(&self) -> &str {
        &self.deps_idx
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// All build descriptors under the build root, skipping the reserved
    /// directory wherever it appears. Unreadable entries are logged and
    /// skipped.
    pub fn proj_file_paths(&self) -> Result<Vec<PathBuf>> {
        let reserved = self.layout.reserved_dir.as_str();
        let walker = WalkDir::new(&self.build_dir)
            .into_iter()
            .filter_entry(|entry| {
                !(entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == reserved)
            });

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable path: {}", err);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if self.layout.is_project_file(entry.path()) {
                trace!("Found project file: {:?}", entry.path());
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// The runtime config directly under the build root, if there is one.
    pub fn runtime_config_file(&self) -> Result<Option<PathBuf>> {
        let pattern = self.layout.runtime_config_pattern(&self.build_dir);
        let mut files = glob::glob(&pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;

        match files.len() {
            0 => Ok(None),
            1 => Ok(files.pop()),
            _ => {
                files.sort();
                Err(Error::AmbiguousRuntimeConfig { files })
            }
        }
    }

    /// A runtime config means the tree is already published output.
    pub fn is_published(&self) -> Result<bool> {
        Ok(self.runtime_config_file()?.is_some())
    }

    pub fn is_fsharp(&self) -> Result<bool> {
        Ok(self
            .proj_file_paths()?
            .iter()
            .any(|path| path.extension().and_then(|e| e.to_str()) == Some("fsproj")))
    }

    /// The single file that defines the application, or `None` when the
    /// build root holds no project at all.
    pub fn main_path(&self) -> Result<Option<PathBuf>> {
        if let Some(runtime_config) = self.runtime_config_file()? {
            debug!("Using runtime config as main path: {:?}", runtime_config);
            return Ok(Some(runtime_config));
        }

        let mut paths = self.proj_file_paths()?;
        match paths.len() {
            0 => Ok(None),
            1 => Ok(paths.pop()),
            _ => {
                let hint_path = self.layout.deployment_path(&self.build_dir);
                match DeploymentHint::load(&hint_path)? {
                    Some(hint) => {
                        let path = hint.resolve(&self.build_dir);
                        debug!("Using project from {:?}: {:?}", hint_path, path);
                        if !path.is_file() {
                            warn!("Project named in {:?} does not exist: {:?}", hint_path, path);
                        }
                        Ok(Some(path))
                    }
                    None => Err(Error::AmbiguousProject { candidates: paths }),
                }
            }
        }
    }
}
