use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    analyze_command, install_command, main_path_command, resolve_command, start_command_command,
    versions_command,
};

#[derive(Parser, Debug)]
#[command(name = "dotnet-launch")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Config file (defaults to the nearest .dotnet-launch.json above the build dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the app lives and where its dependencies are staged
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Build root holding the application source or published output
    #[arg(short, long, default_value = ".")]
    pub build_dir: PathBuf,

    /// Dependency staging root (defaults to <build-dir>/.cloudfoundry)
    #[arg(short = 'D', long)]
    pub deps_dir: Option<PathBuf>,

    /// Index of this buildpack's directory under the deps dir
    #[arg(short = 'i', long, default_value = "0")]
    pub deps_idx: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the main project or runtime config of the build root
    #[command(visible_alias = "m")]
    MainPath {
        #[command(flatten)]
        build: BuildArgs,
    },
    /// Print the command that starts the application
    #[command(visible_alias = "s")]
    StartCommand {
        #[command(flatten)]
        build: BuildArgs,
    },
    /// Print the framework versions the application requires
    #[command(visible_alias = "v")]
    Versions {
        #[command(flatten)]
        build: BuildArgs,

        /// JSON dependency manifest to resolve versions against
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Install the required framework versions that are missing
    Install {
        #[command(flatten)]
        build: BuildArgs,

        /// JSON dependency manifest to resolve versions against
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print what would be installed without installing it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Resolve a version constraint such as 2.1.x against the catalog
    Resolve {
        /// Version constraint, trailing segments may be x or *
        constraint: String,

        /// Catalog component to resolve
        #[arg(long, default_value = "dotnet-framework")]
        component: String,

        /// JSON dependency manifest to resolve versions against
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print every match, highest first
        #[arg(short, long)]
        all: bool,
    },
    /// Show everything decided about the build root
    #[command(visible_alias = "a")]
    Analyze {
        #[command(flatten)]
        build: BuildArgs,

        /// JSON dependency manifest to resolve versions against
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::MainPath { build } => main_path_command(&build, config),
            Commands::StartCommand { build } => start_command_command(&build, config),
            Commands::Versions { build, catalog } => {
                versions_command(&build, config, catalog.as_deref())
            }
            Commands::Install {
                build,
                catalog,
                dry_run,
            } => install_command(&build, config, catalog.as_deref(), dry_run),
            Commands::Resolve {
                constraint,
                component,
                catalog,
                all,
            } => resolve_command(&constraint, &component, config, catalog.as_deref(), all),
            Commands::Analyze {
                build,
                catalog,
                json,
            } => analyze_command(&build, config, catalog.as_deref(), json),
        }
    }
}
