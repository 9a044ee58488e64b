use serde::{Deserialize, Serialize};

/// Content shown in the demo slot of the detail overlay.
///
/// Resolved once when the catalog is built, never re-inferred from the
/// category text at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoKind {
    /// Third-party embedded applet. `None` renders an empty frame.
    Embedded {
        #[serde(default)]
        external_id: Option<String>,
    },
    /// The inline homework to-do list.
    ListWidget,
    /// Concept design, nothing runnable.
    ConceptOnly,
    /// Live demo available upon request.
    #[default]
    OnRequest,
}

/// One project in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub long_description: String,
    /// Opaque asset reference (path or URL). Only shown as a caption.
    pub image: String,
    pub demo: DemoKind,
}

/// A catalog entry as written in a catalog file, before demo resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    /// Explicit demo slot. Falls back to [`crate::catalog::DemoRules`].
    #[serde(default)]
    pub demo: Option<DemoKind>,
}

/// Root of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub projects: Vec<ProjectEntry>,
}
