//! Project materialization planning
//!
//! Pure decision table over (project present, fresh, dry run). Executing
//! the plan, including the safety checks before any removal, happens in the
//! deploy use case.

use std::fmt;

use crate::domain::entities::HostState;

/// What to do with the serving directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializePlan {
    /// Symlink the serving path to the source (dry run)
    Link,
    /// Recursive copy; `replace` removes the existing entry first
    Copy { replace: bool },
    /// Project already present, leave it alone
    Skip,
}

impl fmt::Display for MaterializePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterializePlan::Link => write!(f, "link"),
            MaterializePlan::Copy { replace: false } => write!(f, "copy"),
            MaterializePlan::Copy { replace: true } => write!(f, "replace"),
            MaterializePlan::Skip => write!(f, "skip"),
        }
    }
}

/// What actually happened to the serving directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeOutcome {
    Linked,
    Copied,
    Replaced,
    AlreadyPresent,
}

impl fmt::Display for MaterializeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterializeOutcome::Linked => write!(f, "linked"),
            MaterializeOutcome::Copied => write!(f, "copied"),
            MaterializeOutcome::Replaced => write!(f, "replaced"),
            MaterializeOutcome::AlreadyPresent => write!(f, "already present"),
        }
    }
}

/// | dry_run | present | fresh | plan |
/// |---|---|---|---|
/// | yes | no  | any | `Link` |
/// | yes | yes | any | `Skip` |
/// | no  | no  | any | `Copy` |
/// | no  | yes | yes | `Copy { replace: true }` |
/// | no  | yes | no  | `Skip` |
///
/// With `fresh`, an entry that occupies the path without matching the
/// source is replaced as well, so a stale copy never blocks a fresh run.
pub fn plan_materialize(state: &HostState, fresh: bool, dry_run: bool) -> MaterializePlan {
    let present = state.project_present();

    if dry_run {
        return if present {
            MaterializePlan::Skip
        } else {
            MaterializePlan::Link
        };
    }

    if fresh || !present {
        MaterializePlan::Copy {
            replace: fresh && state.serving_entry.is_present(),
        }
    } else {
        MaterializePlan::Skip
    }
}
