//! Configuration management for dotnet-launch

mod layout;
mod settings;

// Re-export main types
pub use layout::Layout;
pub use settings::{Config, InstallerConfig, CONFIG_FILE_NAMES};
