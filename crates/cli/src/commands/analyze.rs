use anyhow::Result;
use dotnet_launch_core::LaunchPlan;
use std::path::Path;
use tracing::debug;

use crate::cli::BuildArgs;
use crate::context::{engine, load_catalog, load_config};

pub fn analyze_command(
    build: &BuildArgs,
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    debug!("Analyzing build dir: {:?}", build.build_dir);
    let config = load_config(config_path, &build.build_dir)?;
    let catalog = load_catalog(catalog_path, &config)?;
    let plan = engine(build, &config).plan(&catalog)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_formatted_plan(&plan);
    }
    Ok(())
}

pub fn print_formatted_plan(plan: &LaunchPlan) {
    println!("🔍 Analysis");
    println!("{}", "=".repeat(80));

    match &plan.main_path {
        Some(path) => println!("📄 Main path: {}", path.display()),
        None => println!("📄 Main path: None"),
    }
    println!(
        "📦 Published: {}",
        if plan.published { "yes" } else { "no" }
    );
    if plan.fsharp {
        println!("   F# project detected");
    }

    if plan.required_versions.is_empty() {
        println!("🧩 Required frameworks: none");
    } else {
        println!("🧩 Required frameworks:");
        for version in &plan.required_versions {
            println!("   • {version}");
        }
    }

    match &plan.start_command {
        Some(command) => println!("🚀 Start command: {command}"),
        None => println!("❌ No runnable output found yet"),
    }
}
