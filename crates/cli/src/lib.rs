pub mod cli;
pub mod commands;
pub mod context;
pub mod installer;

// Re-export commonly used items
pub use cli::{BuildArgs, Cli, Commands};
pub use installer::{CommandInstaller, DryRunInstaller};
