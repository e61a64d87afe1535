//! Umbrella package hosting the workspace integration tests in `tests/`
pub use dotnet_launch_core::*;
