//! Template resolution for sprout.
//! Two default templates are bundled into the binary; either can be
//! overridden from disk via command-line flags. Resolution happens
//! once at startup into a [`TemplateSet`] handed to the materializer.

use crate::constants::{DEFAULT_COMPONENT_TEMPLATE, DEFAULT_STORY_TEMPLATE};
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// The pair of templates one invocation renders with.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    pub component: String,
    pub story: String,
}

impl TemplateSet {
    /// The bundled defaults.
    pub fn bundled() -> Self {
        Self {
            component: DEFAULT_COMPONENT_TEMPLATE.to_string(),
            story: DEFAULT_STORY_TEMPLATE.to_string(),
        }
    }
}

fn load_template_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::TemplateNotFoundError { path: path.display().to_string() });
    }
    debug!("Loading template override from {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// Resolves the template set from the optional override paths.
///
/// # Arguments
/// * `component_override` - Path from `--component-template`, if given
/// * `story_override` - Path from `--story-template`, if given
///
/// # Returns
/// * `Result<TemplateSet>` - Bundled defaults with overrides applied
///
/// # Errors
/// * `Error::TemplateNotFoundError` if an override path does not exist
pub fn resolve_templates(
    component_override: Option<&Path>,
    story_override: Option<&Path>,
) -> Result<TemplateSet> {
    let mut templates = TemplateSet::bundled();
    if let Some(path) = component_override {
        templates.component = load_template_file(path)?;
    }
    if let Some(path) = story_override {
        templates.story = load_template_file(path)?;
    }
    Ok(templates)
}
