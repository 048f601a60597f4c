//! File-plan computation for sprout.
//! Given the parsed targets, an existence predicate and the exclude
//! set, computes one disposition per candidate file before any
//! mutation occurs. The plan is the full, previewable set of
//! operations for one invocation.

use crate::exclude::relative_for_matching;
use crate::target::Target;
use globset::GlobSet;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// The planned action for one candidate output file.
///
/// Computed once by [`build_plan`], consumed by the confirmation gate
/// and the materializer; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Create,
    Overwrite,
    Skip,
    Excluded,
}

impl Disposition {
    /// Whether this disposition requires an actual write.
    pub fn is_write(self) -> bool {
        matches!(self, Disposition::Create | Disposition::Overwrite)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Disposition::Create => "create",
            Disposition::Overwrite => "overwrite",
            Disposition::Skip => "skip",
            Disposition::Excluded => "exclude",
        };
        write!(f, "{}", s)
    }
}

/// One `(target, path, disposition)` tuple of the plan.
#[derive(Debug)]
pub struct PlanEntry<'a> {
    pub target: &'a Target,
    pub path: PathBuf,
    pub disposition: Disposition,
}

/// The ordered set of dispositions for one invocation.
///
/// Entry order follows target order (which follows document order),
/// with the component file before the story file for each target.
#[derive(Debug, Default)]
pub struct Plan<'a> {
    pub entries: Vec<PlanEntry<'a>>,
}

impl<'a> Plan<'a> {
    /// Entries that will actually be written (CREATE or OVERWRITE).
    pub fn writes(&self) -> impl Iterator<Item = &PlanEntry<'a>> {
        self.entries.iter().filter(|entry| entry.disposition.is_write())
    }

    /// Number of files the materializer would write.
    pub fn write_count(&self) -> usize {
        self.writes().count()
    }
}

fn dispose<F>(path: &Path, target: &Target, file_exists: &F, excludes: &GlobSet, force: bool) -> Disposition
where
    F: Fn(&Path) -> bool,
{
    // Exclusion wins before anything else; an excluded path is never
    // probed for existence.
    let relative = relative_for_matching(path, &target.base_dir);
    if excludes.is_match(&relative) {
        debug!("Excluding '{}'", relative);
        return Disposition::Excluded;
    }

    if !file_exists(path) {
        Disposition::Create
    } else if force {
        Disposition::Overwrite
    } else {
        Disposition::Skip
    }
}

/// Computes the plan for all targets.
///
/// # Arguments
/// * `targets` - Parsed targets, in document order
/// * `file_exists` - Existence predicate, injected for testability
/// * `excludes` - Compiled exclude patterns
/// * `force` - Whether existing files are overwritten instead of skipped
///
/// # Returns
/// * `Plan` - One entry per candidate file, two per target
///
/// # Notes
/// Side-effect-free apart from the existence probe; repeated calls
/// with the same inputs produce the same dispositions.
pub fn build_plan<'a, F>(
    targets: &'a [Target],
    file_exists: F,
    excludes: &GlobSet,
    force: bool,
) -> Plan<'a>
where
    F: Fn(&Path) -> bool,
{
    let mut entries = Vec::with_capacity(targets.len() * 2);

    for target in targets {
        for path in [target.component_path(), target.story_path()] {
            let disposition = dispose(&path, target, &file_exists, excludes, force);
            debug!("Planned {}: '{}'", disposition, path.display());
            entries.push(PlanEntry { target, path, disposition });
        }
    }

    Plan { entries }
}
