//! Installers the CLI can hand to the engine

use anyhow::{Context, Result, bail};
use dotnet_launch_core::{Dependency, Installer, config::InstallerConfig};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Runs an external program as `<command> <args..> <name> <version> <destination>`
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    command: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    fn full_args(&self, dependency: &Dependency, destination: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(dependency.name.clone());
        args.push(dependency.version.clone());
        args.push(destination.display().to_string());
        args
    }

    pub fn to_shell_command(&self, dependency: &Dependency, destination: &Path) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(self.full_args(dependency, destination));
        parts.join(" ")
    }
}

impl From<&InstallerConfig> for CommandInstaller {
    fn from(config: &InstallerConfig) -> Self {
        Self::new(config.command.as_str(), config.args.clone())
    }
}

impl Installer for CommandInstaller {
    fn install_dependency(&self, dependency: &Dependency, destination: &Path) -> Result<()> {
        let shell_cmd = self.to_shell_command(dependency, destination);
        info!("Running: {}", shell_cmd);

        let status = Command::new(&self.command)
            .args(self.full_args(dependency, destination))
            .status()
            .with_context(|| format!("Failed to execute: {shell_cmd}"))?;

        if !status.success() {
            bail!("Installing {} failed: `{}` exited with {}", dependency, shell_cmd, status);
        }
        Ok(())
    }
}

/// Reports what would be installed and changes nothing
#[derive(Debug, Default)]
pub struct DryRunInstaller;

impl Installer for DryRunInstaller {
    fn install_dependency(&self, dependency: &Dependency, destination: &Path) -> Result<()> {
        println!("Would install {} into {}", dependency, destination.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command() {
        let installer = CommandInstaller::new("fetch-dep", vec!["--cache".to_string()]);
        let dependency = Dependency::new("dotnet-framework", "2.1.4");

        assert_eq!(
            installer.to_shell_command(&dependency, Path::new("/deps/0/dotnet")),
            "fetch-dep --cache dotnet-framework 2.1.4 /deps/0/dotnet"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_reported() {
        let dependency = Dependency::new("dotnet-framework", "2.1.4");

        assert!(CommandInstaller::new("true", vec![])
            .install_dependency(&dependency, Path::new("/tmp"))
            .is_ok());

        let err = CommandInstaller::new("false", vec![])
            .install_dependency(&dependency, Path::new("/tmp"))
            .unwrap_err();
        assert!(err.to_string().contains("dotnet-framework 2.1.4"));
    }

    #[test]
    fn test_missing_program() {
        let dependency = Dependency::new("dotnet-framework", "2.1.4");
        let err = CommandInstaller::new("definitely-not-a-real-installer", vec![])
            .install_dependency(&dependency, Path::new("/tmp"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to execute"));
    }
}
