//! Deploy Options
//!
//! Operator choices for one deploy run.

use crate::domain::value_objects::{FailLevel, IntegrityCheck};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Remove and replace an existing deployment with the same identifier
    pub fresh: bool,
    /// Symlink the project instead of copying it
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Level handed to the pre-deployment check
    pub fail_level: FailLevel,
    /// Pre-deployment check command (argv), if the project configures one
    pub check_command: Option<Vec<String>>,
    /// How an existing serving directory is compared to the source
    pub integrity: IntegrityCheck,
    /// Open the site after activation
    pub smoke_check: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            fresh: false,
            dry_run: false,
            assume_yes: false,
            fail_level: FailLevel::default(),
            check_command: None,
            integrity: IntegrityCheck::default(),
            smoke_check: true,
        }
    }

    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn with_fail_level(mut self, level: FailLevel) -> Self {
        self.fail_level = level;
        self
    }

    pub fn with_check_command(mut self, argv: Option<Vec<String>>) -> Self {
        self.check_command = argv.filter(|a| !a.is_empty());
        self
    }

    pub fn with_integrity(mut self, integrity: IntegrityCheck) -> Self {
        self.integrity = integrity;
        self
    }

    pub fn with_smoke_check(mut self, enabled: bool) -> Self {
        self.smoke_check = enabled;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}
