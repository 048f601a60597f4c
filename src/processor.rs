//! File materialization for sprout.
//! The sole mutating component: renders the resolved templates against
//! each target's bindings and writes the results, creating output
//! directories as needed.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::{
    error::Result,
    plan::PlanEntry,
    renderer::TemplateRenderer,
    target::Target,
    template::TemplateSet,
};

/// Builds the data bindings a target's templates are rendered against.
///
/// Exposed keys: `componentName`, `categoryName`, `componentDir`,
/// `componentPath`, `storyPath` and `meta`. Metadata keys a template
/// references but the target does not define render as empty strings.
pub fn build_context(target: &Target) -> serde_json::Value {
    serde_json::json!({
        "componentName": target.name,
        "categoryName": target.category,
        "componentDir": target.output_dir().display().to_string(),
        "componentPath": target.component_path().display().to_string(),
        "storyPath": target.story_path().display().to_string(),
        "meta": target.metadata,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let annotate =
        |e: io::Error| io::Error::new(e.kind(), format!("{} ('{}')", e, path.display()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(annotate)?;
    }
    fs::write(path, content).map_err(annotate)?;
    Ok(())
}

/// Renders and writes plan entries. Holds the engine and the resolved
/// template set for the whole invocation.
pub struct Materializer<'a> {
    engine: &'a dyn TemplateRenderer,
    templates: &'a TemplateSet,
}

impl<'a> Materializer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, templates: &'a TemplateSet) -> Self {
        Self { engine, templates }
    }

    /// Materializes one plan entry.
    ///
    /// Picks the component or story template by which derived path the
    /// entry carries, renders it, and writes the output trimmed of
    /// surrounding whitespace with exactly one trailing newline.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if rendering fails
    /// * `Error::IoError` if directory creation or the write fails
    pub fn materialize(&self, entry: &PlanEntry) -> Result<()> {
        let template = if entry.path == entry.target.story_path() {
            &self.templates.story
        } else {
            &self.templates.component
        };

        debug!("Rendering '{}'", entry.path.display());
        let context = build_context(entry.target);
        let rendered = self.engine.render(template, &context)?;
        let content = format!("{}\n", rendered.trim());

        write_file(&entry.path, &content)
    }
}
