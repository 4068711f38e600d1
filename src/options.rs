//! # Pack Options
//!
//! Settings that control how a source tree is interpreted. The defaults match
//! the conventional `.circleci/` layout, where each level may carry a
//! `config.yml` (or `config.yaml`) primary document.

use serde::{Deserialize, Serialize};

/// File names recognised as a directory's primary document by default.
pub const DEFAULT_PRIMARY_DOCUMENTS: &[&str] = &["config.yml", "config.yaml"];

/// Extensions of files that are loaded as YAML.
pub const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Options for a pack run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackOptions {
    /// File names treated as the primary document at every directory level.
    ///
    /// At most one of them may be present in a single directory.
    pub primary_documents: Vec<String>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            primary_documents: DEFAULT_PRIMARY_DOCUMENTS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl PackOptions {
    /// Replace the primary document names.
    pub fn with_primary_documents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_documents = names.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` is one of the primary document names.
    pub fn is_primary_document(&self, name: &str) -> bool {
        self.primary_documents.iter().any(|p| p == name)
    }
}
