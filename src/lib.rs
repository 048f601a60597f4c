//! sprout is a declarative component scaffolding tool.
//! Given a YAML list of named components grouped into categories, it
//! computes a previewable plan of file operations and, after
//! confirmation, generates a templated component/story file pair per
//! component.

/// Command-line interface module for the sprout application
pub mod cli;

/// Configuration handling for sprout
/// Parses the declarative YAML document into generation targets
pub mod config;

/// Common constants and bundled default templates
pub mod constants;

/// Error types and handling for the sprout application
pub mod error;

/// Exclude pattern handling
/// Compiles configuration glob patterns into a matchable set
pub mod exclude;

/// File-plan computation
/// Computes one disposition per candidate file before any mutation
pub mod plan;

/// File materialization
/// Renders templates and writes the planned output files
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template parsing and rendering functionality
pub mod renderer;

/// The target descriptor and its derived output paths
pub mod target;

/// Template resolution (bundled defaults and flag overrides)
pub mod template;
