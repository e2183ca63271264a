//! HostState entity - snapshot of what a previous run left on the host.

use crate::domain::ports::EntryKind;

/// Transient snapshot taken at the start of every run; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostState {
    pub service_exists: bool,
    pub socket_exists: bool,
    pub vhost_available_exists: bool,
    pub vhost_enabled_exists: bool,
    /// What occupies the serving directory path
    pub serving_entry: EntryKind,
    /// Serving path matches the source under the configured integrity check
    pub project_matches: bool,
}

impl HostState {
    /// Nothing deployed yet
    pub fn empty() -> Self {
        Self {
            service_exists: false,
            socket_exists: false,
            vhost_available_exists: false,
            vhost_enabled_exists: false,
            serving_entry: EntryKind::Missing,
            project_matches: false,
        }
    }

    /// Any of the unit, socket or available-vhost files exists.
    ///
    /// The enabled vhost is deliberately not part of this check.
    pub fn any_artifact_exists(&self) -> bool {
        self.service_exists || self.socket_exists || self.vhost_available_exists
    }

    /// The project "exists" at the serving path: something is there and it
    /// matches the source
    pub fn project_present(&self) -> bool {
        self.serving_entry.is_present() && self.project_matches
    }
}
