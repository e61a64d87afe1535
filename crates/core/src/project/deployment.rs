//! `.deployment` hint file
//!
//! ```ini
//! [config]
//! project = ./src/web/web.csproj
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const SECTION: &str = "config";
const PROJECT_KEY: &str = "project";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentHint {
    pub project: String,
}

impl DeploymentHint {
    /// Load the hint at `path`. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }

        let malformed = |message: String| Error::MalformedDeploymentHint {
            path: path.to_path_buf(),
            message,
        };

        let ini = ini::Ini::load_from_file(path).map_err(|e| malformed(e.to_string()))?;
        let section = ini
            .section(Some(SECTION))
            .ok_or_else(|| malformed(format!("section [{SECTION}] not found")))?;
        let project = section
            .get(PROJECT_KEY)
            .ok_or_else(|| malformed(format!("key '{PROJECT_KEY}' not found in [{SECTION}]")))?;

        Ok(Some(Self {
            project: project.trim().to_string(),
        }))
    }

    /// The hinted project as a path under `build_dir`
    pub fn resolve(&self, build_dir: &Path) -> PathBuf {
        let relative = self
            .project
            .trim_matches('.')
            .trim_start_matches(['/', '\\']);
        build_dir.join(relative)
    }
}
