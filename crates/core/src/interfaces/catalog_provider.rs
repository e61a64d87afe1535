//! Version catalog interface

use crate::{error::Result, version};

/// Trait for anything that knows which versions of a component are available
pub trait CatalogProvider {
    /// All known versions for `component`, in no particular order
    fn all_versions(&self, component: &str) -> Vec<String>;

    /// Resolve `constraint` against the versions known for `component`
    fn find_matching_version(&self, component: &str, constraint: &str) -> Result<String> {
        version::find_matching_version(constraint, self.all_versions(component))
    }

    /// Every version of `component` matching `constraint`, highest first
    fn find_matching_versions(&self, component: &str, constraint: &str) -> Result<Vec<String>> {
        version::find_matching_versions(constraint, self.all_versions(component))
    }
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for &T {
    fn all_versions(&self, component: &str) -> Vec<String> {
        (**self).all_versions(component)
    }
}
