//! Collaborator interfaces
//!
//! The engine never fetches archives or reads a global manifest itself. The
//! surrounding build tool injects both capabilities through these traits.

pub mod catalog_provider;
pub mod installer;

pub use catalog_provider::CatalogProvider;
pub use installer::{Dependency, Installer};
