//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{DeployUseCase, DiffUseCase, StatusUseCase};
use crate::config::{self, Config, ConfigWarning, PROJECT_FILE};
use crate::error::DeployResult;
use crate::infrastructure::{LocalFs, SystemEnvironment, SystemRunner};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, SystemRunner, SystemEnvironment>;

/// Create a deploy use case running against the real host
pub fn create_deploy_use_case(config: &Config) -> ConcreteDeployUseCase {
    let mut runner = SystemRunner::new();
    if let Some(browser) = config.browser() {
        runner = runner.with_browser(browser);
    }
    DeployUseCase::new(LocalFs::new(), runner, SystemEnvironment::new())
}

pub fn create_status_use_case() -> StatusUseCase<LocalFs> {
    StatusUseCase::new(LocalFs::new())
}

pub fn create_diff_use_case() -> DiffUseCase<LocalFs> {
    DiffUseCase::new(LocalFs::new())
}

/// Load the layered configuration for a project directory
pub fn load_config(
    project: &Path,
    explicit: Option<&Path>,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let user_file = config::user_config_path();
    match explicit {
        Some(file) => config::load_layered(file, true, user_file.as_deref()),
        None => config::load_layered(&project.join(PROJECT_FILE), false, user_file.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn project_file_is_picked_up() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_FILE),
            "[deploy]\nname = \"demo\"\n[smoke]\nbrowser = \"true\"\n",
        )
        .unwrap();

        let (config, _) = load_config(dir.path(), None).unwrap();

        assert_eq!(config.deploy.name.as_deref(), Some("demo"));
        let _use_case = create_deploy_use_case(&config);
    }
}
