use anyhow::Result;
use std::path::Path;

use crate::cli::BuildArgs;
use crate::context::{engine, load_catalog, load_config};

pub fn versions_command(
    build: &BuildArgs,
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path, &build.build_dir)?;
    let catalog = load_catalog(catalog_path, &config)?;

    for version in engine(build, &config).required_versions(&catalog)? {
        println!("{version}");
    }
    Ok(())
}
