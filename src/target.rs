//! The target descriptor: one named component to generate, with its
//! category and metadata. Output paths are derived, never stored, so
//! repeated derivation is idempotent.

use crate::constants::{COMPONENT_EXT, STORY_EXT};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// One entity to be generated: a component name grouped under a
/// category, rooted at a base directory, with optional free-form
/// metadata exposed to the templates.
///
/// Created by the config parser and immutable afterwards; the plan
/// builder and materializer hold read-only references.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub base_dir: PathBuf,
    pub category: String,
    pub name: String,
    pub metadata: IndexMap<String, String>,
}

impl Target {
    pub fn new<P: AsRef<Path>>(
        base_dir: P,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            category: category.into(),
            name: name.into(),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: IndexMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Directory the component's files are generated into:
    /// `base_dir/category/name/`.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.category).join(&self.name)
    }

    /// Path of the component file: `output_dir/name.tsx`.
    pub fn component_path(&self) -> PathBuf {
        self.output_dir().join(format!("{}.{}", self.name, COMPONENT_EXT))
    }

    /// Path of the story file: `output_dir/name.stories.tsx`.
    pub fn story_path(&self) -> PathBuf {
        self.output_dir().join(format!("{}.{}", self.name, STORY_EXT))
    }
}
