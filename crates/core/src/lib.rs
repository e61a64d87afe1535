//! dotnet-launch - Decide what a .NET Core build needs and how to start it
//!
//! This crate provides functionality to:
//! - Locate the main project of a build root (runtime config, build
//!   descriptor or `.deployment` hint)
//! - Resolve the required `Microsoft.NETCore.App` versions and install the
//!   missing ones through an injected installer
//! - Synthesize the start command for the published output
pub mod catalog;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod framework;
pub mod interfaces;
pub mod project;
pub mod version;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use interfaces::{CatalogProvider, Dependency, Installer};

// Re-export main API components
pub use catalog::{Manifest, StaticCatalog};
pub use command::StartCommand;
pub use config::{Config, Layout};
pub use engine::{LaunchEngine, LaunchPlan};
pub use framework::{FrameworkDetector, FrameworkInstaller};
pub use project::Project;
