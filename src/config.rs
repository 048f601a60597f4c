//! Configuration handling for sprout.
//! Loads the declarative YAML document and normalizes it into an
//! ordered sequence of generation targets plus exclude patterns.

use crate::constants::EXCLUDES_KEY;
use crate::error::{Error, Result};
use crate::target::Target;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// One configuration entry. Entries are polymorphic over two shapes:
/// a bare component name, or a single-key mapping from the name to a
/// sequence of metadata mappings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Bare(String),
    WithMetadata(IndexMap<String, Option<Vec<IndexMap<String, MetaValue>>>>),
}

/// A scalar metadata value. Numbers and booleans are stringified;
/// nested sequences or mappings are rejected as part of the entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MetaValue {
    String(String),
    Number(serde_yaml::Number),
    Bool(bool),
}

impl MetaValue {
    fn into_string(self) -> String {
        match self {
            MetaValue::String(s) => s,
            MetaValue::Number(n) => n.to_string(),
            MetaValue::Bool(b) => b.to_string(),
        }
    }
}

/// Loads the configuration document from disk.
///
/// # Arguments
/// * `config_path` - Path given via `--config`
///
/// # Returns
/// * `Result<String>` - Raw configuration content
///
/// # Errors
/// * `Error::ConfigNotFoundError` if the file does not exist
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<String> {
    let config_path = config_path.as_ref();
    if !config_path.exists() {
        return Err(Error::ConfigNotFoundError {
            path: config_path.display().to_string(),
        });
    }
    debug!("Loading configuration from {}", config_path.display());
    Ok(std::fs::read_to_string(config_path)?)
}

/// Renders a YAML node into a short single-line form for error messages.
fn describe(value: &serde_yaml::Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().replace('\n', " "))
        .unwrap_or_else(|_| "<unprintable>".to_string())
}

/// Parses one entry of a category sequence into its name and metadata.
///
/// For duplicate metadata keys the later occurrence wins.
///
/// # Errors
/// * `Error::ConfigFormatError` naming the category and entry when the
///   entry is neither a bare name nor a name-with-metadata mapping
fn parse_entry(
    category: &str,
    value: &serde_yaml::Value,
) -> Result<(String, IndexMap<String, String>)> {
    let invalid_entry = || {
        Error::ConfigFormatError(format!(
            "invalid entry in category '{}': {}",
            category,
            describe(value)
        ))
    };

    let entry: RawEntry =
        serde_yaml::from_value(value.clone()).map_err(|_| invalid_entry())?;

    match entry {
        RawEntry::Bare(name) => Ok((name, IndexMap::new())),
        RawEntry::WithMetadata(mapping) => {
            let mut pairs = mapping.into_iter();
            let (name, meta_list) = match (pairs.next(), pairs.next()) {
                (Some(first), None) => first,
                // More than one name per entry is ambiguous.
                _ => return Err(invalid_entry()),
            };

            let mut metadata = IndexMap::new();
            for meta_pair in meta_list.unwrap_or_default() {
                for (key, meta_value) in meta_pair {
                    metadata.insert(key, meta_value.into_string());
                }
            }

            Ok((name, metadata))
        }
    }
}

/// Parses the exclude pattern list from the reserved `excludes` key.
fn parse_excludes(value: &serde_yaml::Value) -> Result<Vec<String>> {
    let items = match value {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Sequence(items) => items,
        _ => {
            return Err(Error::ConfigFormatError(format!(
                "'{}' must hold a sequence of glob patterns",
                EXCLUDES_KEY
            )))
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(|s| s.to_string()).ok_or_else(|| {
                Error::ConfigFormatError(format!(
                    "invalid pattern in '{}': {}",
                    EXCLUDES_KEY,
                    describe(item)
                ))
            })
        })
        .collect()
}

/// Parses the configuration content into targets and exclude patterns.
///
/// The top-level document must be a mapping from category name to a
/// sequence of entries. Categories are visited in document order and
/// entries in sequence order; that order is preserved into the plan.
///
/// # Arguments
/// * `content` - Raw configuration content
/// * `base_dir` - Root output directory every target is rooted at
///
/// # Returns
/// * `Result<(Vec<Target>, Vec<String>)>` - Ordered targets and
///   exclude patterns
///
/// # Errors
/// * `Error::ConfigFormatError` if the document or any entry is malformed
pub fn parse_config<P: AsRef<Path>>(
    content: &str,
    base_dir: P,
) -> Result<(Vec<Target>, Vec<String>)> {
    let base_dir = base_dir.as_ref();

    let document: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| Error::ConfigFormatError(format!("invalid configuration format: {}", e)))?;

    let mapping = document.as_mapping().ok_or_else(|| {
        Error::ConfigFormatError(
            "top-level document must be a mapping of categories".to_string(),
        )
    })?;

    let mut targets = Vec::new();
    let mut excludes = Vec::new();

    for (key, value) in mapping {
        let category = key.as_str().ok_or_else(|| {
            Error::ConfigFormatError(format!("invalid top-level key: {}", describe(key)))
        })?;

        if category == EXCLUDES_KEY {
            excludes = parse_excludes(value)?;
            continue;
        }

        let entries = value.as_sequence().ok_or_else(|| {
            Error::ConfigFormatError(format!(
                "category '{}' must hold a sequence of entries",
                category
            ))
        })?;

        for entry_value in entries {
            let (name, metadata) = parse_entry(category, entry_value)?;
            if name.is_empty() {
                return Err(Error::ConfigFormatError(format!(
                    "empty component name in category '{}'",
                    category
                )));
            }
            debug!("Parsed entry '{}' in category '{}'", name, category);

            targets.push(Target::new(base_dir, category, name).with_metadata(metadata));
        }
    }

    Ok((targets, excludes))
}
