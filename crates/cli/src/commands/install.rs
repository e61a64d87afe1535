use anyhow::{Result, bail};
use dotnet_launch_core::Installer;
use std::path::Path;

use crate::cli::BuildArgs;
use crate::context::{engine, load_catalog, load_config};
use crate::installer::{CommandInstaller, DryRunInstaller};

pub fn install_command(
    build: &BuildArgs,
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path, &build.build_dir)?;
    let catalog = load_catalog(catalog_path, &config)?;

    let installer: Box<dyn Installer> = if dry_run {
        Box::new(DryRunInstaller)
    } else {
        match config.installer.as_ref() {
            Some(installer) => Box::new(CommandInstaller::from(installer)),
            None => bail!("No installer configured; set \"installer\" in the config file or use --dry-run"),
        }
    };

    let installed = engine(build, &config).install_frameworks(&catalog, installer.as_ref())?;
    if !dry_run {
        for dependency in &installed {
            println!("Installed {dependency}");
        }
    }
    Ok(())
}
