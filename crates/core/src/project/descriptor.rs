//! Build descriptor (`*.csproj`, `*.vbproj`, `*.fsproj`) metadata

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct ProjectXml {
    #[serde(rename = "PropertyGroup", default)]
    property_groups: Vec<PropertyGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyGroup {
    #[serde(rename = "AssemblyName", default)]
    assembly_names: Vec<String>,
}

/// Parse descriptor XML and return its `AssemblyName` override, if any.
///
/// When several are declared, in one property group or across groups, the
/// last non-empty one wins.
pub fn parse_assembly_name(contents: &str) -> std::result::Result<Option<String>, quick_xml::DeError> {
    let project: ProjectXml = quick_xml::de::from_str(contents)?;
    Ok(project
        .property_groups
        .into_iter()
        .flat_map(|group| group.assembly_names)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .last())
}

pub fn assembly_name(path: &Path) -> Result<Option<String>> {
    let contents = std::fs::read_to_string(path)?;
    parse_assembly_name(&contents).map_err(|e| Error::MalformedDescriptor {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
