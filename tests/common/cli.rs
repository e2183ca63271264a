//! Runs the django-deploy binary in an isolated environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Project directory plus an empty XDG config home so no user
/// configuration leaks into the test.
pub struct CliEnv {
    pub project: TempDir,
    pub config_home: TempDir,
}

impl CliEnv {
    pub fn new() -> Self {
        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join("manage.py"), "import django\n").unwrap();
        Self {
            project,
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.project.path().join("deploy.toml"), content).unwrap();
    }

    pub fn project_path(&self) -> &Path {
        self.project.path()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(bin())
            .args(args)
            .current_dir(self.project.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("DJANGO_DEPLOY_NAME")
            .env_remove("DJANGO_DEPLOY_HOST")
            .env_remove("DJANGO_DEPLOY_MODE")
            .env_remove("DJANGO_DEPLOY_INTEGRITY")
            .env_remove("DJANGO_DEPLOY_SYSTEMD_DIR")
            .env_remove("DJANGO_DEPLOY_NGINX_DIR")
            .env_remove("DJANGO_DEPLOY_WWW_DIR")
            .env_remove("DJANGO_DEPLOY_RUN_DIR")
            .env_remove("DJANGO_DEPLOY_LOG")
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_django-deploy"))
}
