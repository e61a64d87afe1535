use anyhow::Result;
use std::path::Path;

use crate::cli::BuildArgs;
use crate::context::{engine, load_config};

pub fn main_path_command(build: &BuildArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &build.build_dir)?;
    if let Some(path) = engine(build, &config).main_path()? {
        println!("{}", path.display());
    }
    Ok(())
}
