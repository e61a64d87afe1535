//! Dot-segment version parsing and wildcard constraint matching
//!
//! Versions are compared segment by segment (`2.10.0 > 2.9.7`), never as
//! floating point numbers. A constraint may end in one or more wildcard
//! segments (`x`, `X` or `*`), e.g. `2.1.x`.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const WILDCARDS: [&str; 3] = ["x", "X", "*"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Numeric(u64),
    Text(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse() {
                return Segment::Numeric(n);
            }
        }
        Segment::Text(raw.to_string())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
            (Segment::Numeric(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Numeric(_)) => Ordering::Greater,
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits `1.2.3-preview+build` into its dot segments and pre-release tag.
/// Build metadata is dropped.
fn split_version(raw: &str) -> Result<(Vec<&str>, Option<&str>)> {
    let trimmed = raw.trim();
    let without_build = trimmed.split('+').next().unwrap_or(trimmed);
    let (core, pre) = match without_build.split_once('-') {
        Some((core, pre)) if !pre.is_empty() => (core, Some(pre)),
        Some(_) => return Err(Error::InvalidVersion(raw.to_string())),
        None => (without_build, None),
    };

    if core.is_empty() {
        return Err(Error::InvalidVersion(raw.to_string()));
    }
    let parts: Vec<&str> = core.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::InvalidVersion(raw.to_string()));
    }
    Ok((parts, pre))
}

/// A concrete version from a catalog
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<Segment>,
    pre: Option<String>,
    raw: String,
}

impl Version {
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let (parts, pre) = split_version(raw)?;
        Ok(Version {
            segments: parts.into_iter().map(Segment::parse).collect(),
            pre: pre.map(str::to_string),
            raw: raw.trim().to_string(),
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments
            .cmp(&other.segments)
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A version constraint such as `2.1.x` or `2.1.4`
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Segments before the first wildcard
    prefix: Vec<Segment>,
    wildcard: bool,
    pre: Option<String>,
    raw: String,
}

impl Constraint {
    pub fn matches(&self, version: &Version) -> bool {
        if self.wildcard {
            // Wildcards never select pre-releases
            version.pre.is_none()
                && version.segments.len() >= self.prefix.len()
                && version.segments[..self.prefix.len()] == self.prefix[..]
        } else {
            version.segments == self.prefix && version.pre == self.pre
        }
    }
}

impl FromStr for Constraint {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let (parts, pre) = split_version(raw)?;

        let mut prefix = Vec::new();
        let mut wildcard = false;
        for part in parts {
            if WILDCARDS.contains(&part) {
                wildcard = true;
            } else if wildcard {
                // Only trailing segments may be wildcards
                return Err(Error::InvalidVersion(raw.to_string()));
            } else {
                prefix.push(Segment::parse(part));
            }
        }

        if wildcard && pre.is_some() {
            return Err(Error::InvalidVersion(raw.to_string()));
        }

        Ok(Constraint {
            prefix,
            wildcard,
            pre: pre.map(str::to_string),
            raw: raw.trim().to_string(),
        })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns every version matching `constraint`, highest first.
pub fn find_matching_versions<I, S>(constraint: &str, versions: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed: Constraint = constraint.parse()?;

    let mut available = 0;
    let mut matches: Vec<Version> = Vec::new();
    for candidate in versions {
        available += 1;
        let candidate = candidate.as_ref();
        match candidate.parse::<Version>() {
            Ok(version) if parsed.matches(&version) => matches.push(version),
            Ok(_) => {}
            Err(_) => debug!("Skipping unparseable catalog version: {:?}", candidate),
        }
    }

    if matches.is_empty() {
        return Err(Error::NoMatchingVersion {
            constraint: constraint.to_string(),
            available,
        });
    }

    matches.sort_by(|a, b| b.cmp(a));
    matches.dedup();
    Ok(matches.into_iter().map(|v| v.raw).collect())
}

/// Returns the highest version matching `constraint`.
pub fn find_matching_version<I, S>(constraint: &str, versions: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matches = find_matching_versions(constraint, versions)?;
    Ok(matches.swap_remove(0))
}

/// Replaces the patch segment of `version` with a wildcard: `2.1.3` becomes
/// `2.1.x`. Versions with fewer than three segments get the wildcard appended.
pub fn patch_wildcard(version: &str) -> Result<String> {
    let (parts, _) = split_version(version)?;
    let kept: Vec<&str> = parts.into_iter().take(2).collect();
    Ok(format!("{}.x", kept.join(".")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_picks_highest_patch() {
        let versions = catalog(&["2.1.3", "2.0.9", "2.1.12", "2.1.4", "3.0.0"]);
        assert_eq!(find_matching_version("2.1.x", &versions).unwrap(), "2.1.12");
    }

    #[test]
    fn test_numeric_not_lexical_ordering() {
        let versions = catalog(&["1.9.0", "1.10.0", "1.2.0"]);
        assert_eq!(find_matching_version("1.x", &versions).unwrap(), "1.10.0");
        assert_eq!(
            find_matching_versions("1.x", &versions).unwrap(),
            vec!["1.10.0", "1.9.0", "1.2.0"]
        );
    }

    #[test]
    fn test_multi_level_wildcard() {
        let versions = catalog(&["2.0.9", "2.1.3", "1.9.9", "2.1.12"]);
        assert_eq!(find_matching_version("2.x.x", &versions).unwrap(), "2.1.12");
        assert_eq!(find_matching_version("x", &versions).unwrap(), "2.1.12");
    }

    #[test]
    fn test_no_matching_version() {
        let versions = catalog(&["2.0.9", "2.1.3"]);
        match find_matching_version("3.1.x", &versions) {
            Err(Error::NoMatchingVersion {
                constraint,
                available,
            }) => {
                assert_eq!(constraint, "3.1.x");
                assert_eq!(available, 2);
            }
            other => panic!("expected NoMatchingVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let versions: Vec<String> = Vec::new();
        assert!(matches!(
            find_matching_version("2.1.x", &versions),
            Err(Error::NoMatchingVersion { available: 0, .. })
        ));
    }

    #[test]
    fn test_exact_constraint() {
        let versions = catalog(&["2.1.3", "2.1.4"]);
        assert_eq!(find_matching_version("2.1.3", &versions).unwrap(), "2.1.3");
        assert!(find_matching_version("2.1.5", &versions).is_err());
    }

    #[test]
    fn test_wildcard_skips_prereleases() {
        let versions = catalog(&["2.1.0", "2.1.1-preview1", "2.1.1-rc1"]);
        assert_eq!(find_matching_version("2.1.x", &versions).unwrap(), "2.1.0");
        assert_eq!(
            find_matching_version("2.1.1-rc1", &versions).unwrap(),
            "2.1.1-rc1"
        );
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        let pre: Version = "2.1.1-preview1".parse().unwrap();
        let release: Version = "2.1.1".parse().unwrap();
        assert!(pre < release);
        assert!(pre.is_prerelease());
    }

    #[test]
    fn test_unparseable_catalog_entries_are_skipped() {
        let versions = catalog(&["", "2..1", "2.1.7"]);
        assert_eq!(find_matching_version("2.1.x", &versions).unwrap(), "2.1.7");
    }

    #[test]
    fn test_invalid_constraints() {
        assert!(matches!(
            "2.x.1".parse::<Constraint>(),
            Err(Error::InvalidVersion(_))
        ));
        assert!("".parse::<Constraint>().is_err());
        assert!("2.x-preview".parse::<Constraint>().is_err());
    }

    #[test]
    fn test_patch_wildcard() {
        assert_eq!(patch_wildcard("2.1.3").unwrap(), "2.1.x");
        assert_eq!(patch_wildcard("2.1.3-preview2").unwrap(), "2.1.x");
        assert_eq!(patch_wildcard("2.1").unwrap(), "2.1.x");
        assert_eq!(patch_wildcard("6.0.1.5").unwrap(), "6.0.x");
    }
}
