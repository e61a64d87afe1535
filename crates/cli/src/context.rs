//! Shared setup for commands: config, engine and catalog

use anyhow::{Context, Result};
use dotnet_launch_core::{Config, LaunchEngine, Manifest};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::BuildArgs;

/// Load the config named on the command line, or the nearest one above
/// `build_dir`, or the defaults.
pub fn load_config(explicit: Option<&Path>, build_dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::discover(build_dir).context("Failed to load config"),
    }
}

pub fn deps_dir(build: &BuildArgs, config: &Config) -> PathBuf {
    build
        .deps_dir
        .clone()
        .unwrap_or_else(|| build.build_dir.join(&config.layout.reserved_dir))
}

pub fn engine(build: &BuildArgs, config: &Config) -> LaunchEngine {
    let dep_dir = deps_dir(build, config).join(&build.deps_idx);
    debug!(
        "Build dir: {:?}, dep dir: {:?}, deps idx: {}",
        build.build_dir, dep_dir, build.deps_idx
    );
    LaunchEngine::with_config(&build.build_dir, &dep_dir, &build.deps_idx, config)
}

/// The `--catalog` manifest, else the configured one, else an empty catalog
pub fn load_catalog(explicit: Option<&Path>, config: &Config) -> Result<Manifest> {
    match explicit.or(config.catalog.as_deref()) {
        Some(path) => Manifest::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            debug!("No catalog configured, using an empty one");
            Ok(Manifest::default())
        }
    }
}
