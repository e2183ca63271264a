//! Conflict Resolver
//!
//! Decides what to do about artifacts left by an earlier deployment with
//! the same identifier.

use std::fmt;

use crate::domain::entities::HostState;

/// Outcome of conflict resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing installed under this identifier
    Proceed,
    /// Remove unit, socket and both vhost files, then install
    RemoveThenProceed,
    /// Already deployed and the operator did not ask for a fresh install
    Abort,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Proceed => write!(f, "proceed"),
            Resolution::RemoveThenProceed => write!(f, "remove then proceed"),
            Resolution::Abort => write!(f, "abort"),
        }
    }
}

/// Only the unit, socket and available-vhost paths are considered; a stray
/// enabled vhost is removed on a fresh run but never blocks on its own.
pub fn resolve(state: &HostState, fresh: bool) -> Resolution {
    if !state.any_artifact_exists() {
        Resolution::Proceed
    } else if fresh {
        Resolution::RemoveThenProceed
    } else {
        Resolution::Abort
    }
}
