//! Project catalog: the ordered records driving the carousel.

mod builtin;
mod demo;
mod loader;
mod types;

pub use demo::DemoRules;
pub use loader::{Catalog, CatalogError};
pub use types::{CatalogFile, DemoKind, ProjectEntry, ProjectRecord};
