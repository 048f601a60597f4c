//! Common constants used throughout the sprout application.

/// Default directory components are generated into.
pub const DEFAULT_BASE_DIR: &str = "src/components";

/// Extension of the primary (component) file.
pub const COMPONENT_EXT: &str = "tsx";

/// Extension of the secondary (story) file.
pub const STORY_EXT: &str = "stories.tsx";

/// Reserved top-level configuration key holding exclude patterns.
pub const EXCLUDES_KEY: &str = "excludes";

/// Default component template, bundled into the binary.
pub const DEFAULT_COMPONENT_TEMPLATE: &str =
    include_str!("../templates/component.tsx.j2");

/// Default story template, bundled into the binary.
pub const DEFAULT_STORY_TEMPLATE: &str = include_str!("../templates/story.tsx.j2");
