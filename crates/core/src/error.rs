use std::io;
use std::path::PathBuf;

/// Errors that can occur while resolving a .NET Core application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Multiple .runtimeconfig.json files present: {files:?}")]
    AmbiguousRuntimeConfig { files: Vec<PathBuf> },

    #[error("Multiple paths: {candidates:?} contain a project file, but no .deployment file was used")]
    AmbiguousProject { candidates: Vec<PathBuf> },

    #[error("no match found for {constraint} in {available} available versions")]
    NoMatchingVersion { constraint: String, available: usize },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Could not parse {path}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    #[error("Could not parse runtime config {path}: {message}")]
    MalformedRuntimeConfig { path: PathBuf, message: String },

    #[error("Invalid .deployment file {path}: {message}")]
    MalformedDeploymentHint { path: PathBuf, message: String },

    #[error(transparent)]
    InstallFailure(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Glob error: {0}")]
    GlobError(String),
}

/// Result type alias for dotnet-launch operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Error::GlobError(err.to_string())
    }
}

impl From<glob::GlobError> for Error {
    fn from(err: glob::GlobError) -> Self {
        Error::GlobError(err.to_string())
    }
}
