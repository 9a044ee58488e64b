use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::builtin::builtin_entries;
use crate::catalog::demo::DemoRules;
use crate::catalog::types::{CatalogFile, ProjectEntry, ProjectRecord};

/// Errors that can occur when building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog must contain at least one project")]
    Empty,

    #[error("Project id must be positive (entry '{title}')")]
    ZeroId { title: String },

    #[error("Duplicate project id {id}")]
    DuplicateId { id: u32 },
}

/// Immutable, ordered, non-empty list of projects with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from raw entries, resolving each demo slot once.
    pub fn from_entries(
        entries: Vec<ProjectEntry>,
        rules: &DemoRules,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.id == 0 {
                return Err(CatalogError::ZeroId { title: entry.title });
            }
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
            let demo = entry
                .demo
                .unwrap_or_else(|| rules.resolve(entry.id, &entry.category));
            records.push(ProjectRecord {
                id: entry.id,
                title: entry.title,
                category: entry.category,
                short_description: entry.short_description,
                long_description: entry.long_description,
                image: entry.image,
                demo,
            });
        }

        Ok(Self { records })
    }

    /// The built-in student project catalog.
    pub fn builtin(rules: &DemoRules) -> Self {
        match Self::from_entries(builtin_entries(), rules) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("built-in catalog is valid: {err}"),
        }
    }

    /// Load a catalog from a TOML file with a `[[projects]]` array.
    pub fn load_from(path: &Path, rules: &DemoRules) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: CatalogFile = toml::from_str(&content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_entries(file.projects, rules)
    }

    /// Load `path` when given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>, rules: &DemoRules) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path, rules),
            None => Ok(Self::builtin(rules)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    /// Look up a record by id.
    pub fn find(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn as_slice(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::DemoKind;

    #[test]
    fn builtin_has_six_projects_in_order() {
        let catalog = Catalog::builtin(&DemoRules::default());
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn builtin_resolves_demo_slots() {
        let catalog = Catalog::builtin(&DemoRules::default());
        assert!(matches!(
            catalog.find(1).map(|r| &r.demo),
            Some(DemoKind::Embedded { external_id: Some(_) })
        ));
        assert_eq!(catalog.find(4).map(|r| &r.demo), Some(&DemoKind::ListWidget));
        assert_eq!(catalog.find(5).map(|r| &r.demo), Some(&DemoKind::OnRequest));
        assert_eq!(catalog.find(6).map(|r| &r.demo), Some(&DemoKind::ConceptOnly));
    }

    #[test]
    fn find_missing_id_is_none() {
        let catalog = Catalog::builtin(&DemoRules::default());
        assert!(catalog.find(42).is_none());
    }
}
