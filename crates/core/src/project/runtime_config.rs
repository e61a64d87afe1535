//! `*.runtimeconfig.json` model
//!
//! Only the fields needed to pick a framework version are captured; anything
//! else in the file is ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub runtime_options: RuntimeOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    #[serde(default)]
    pub framework: Framework,
    pub apply_patches: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Framework {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl RuntimeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|e| Error::MalformedRuntimeConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn framework_name(&self) -> Option<&str> {
        Some(self.runtime_options.framework.name.as_str()).filter(|n| !n.is_empty())
    }

    pub fn framework_version(&self) -> Option<&str> {
        Some(self.runtime_options.framework.version.trim()).filter(|v| !v.is_empty())
    }

    /// Roll forward to the latest patch unless explicitly disabled
    pub fn apply_patches(&self) -> bool {
        self.runtime_options.apply_patches.unwrap_or(true)
    }
}
