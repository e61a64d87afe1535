use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::cli::BuildArgs;
use crate::context::{engine, load_config};

pub fn start_command_command(build: &BuildArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &build.build_dir)?;
    match engine(build, &config).start_command()? {
        Some(command) => println!("{command}"),
        None => info!("Nothing runnable found yet"),
    }
    Ok(())
}
