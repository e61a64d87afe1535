use anyhow::Result;
use dotnet_launch_core::CatalogProvider;
use std::path::Path;

use crate::context::{load_catalog, load_config};

pub fn resolve_command(
    constraint: &str,
    component: &str,
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    all: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(config_path, &cwd)?;
    let catalog = load_catalog(catalog_path, &config)?;

    if all {
        for version in catalog.find_matching_versions(component, constraint)? {
            println!("{version}");
        }
    } else {
        println!("{}", catalog.find_matching_version(component, constraint)?);
    }
    Ok(())
}
