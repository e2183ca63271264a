//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::DeploymentSpec;
use crate::domain::value_objects::{HostLayout, IntegrityCheck, ServingMode};
use crate::error::{DeployError, DeployResult};

use super::loader::{self, ConfigWarning};

/// `[deploy]`: identity of the deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeploySection {
    /// Application name; names the serving directory
    pub name: Option<String>,
    /// Deployment identifier, defaults to the name
    pub id: Option<String>,
    /// Python package holding `wsgi.py` / `asgi.py`
    pub module: Option<String>,
    pub host: Option<String>,
    pub log: Option<PathBuf>,
    pub mode: Option<ServingMode>,
}

/// `[paths]`: host roots
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub systemd: Option<PathBuf>,
    pub nginx: Option<PathBuf>,
    pub www: Option<PathBuf>,
    pub run: Option<PathBuf>,
}

impl PathsSection {
    pub fn layout(&self) -> HostLayout {
        let defaults = HostLayout::default();
        HostLayout {
            systemd_dir: self.systemd.clone().unwrap_or(defaults.systemd_dir),
            nginx_dir: self.nginx.clone().unwrap_or(defaults.nginx_dir),
            www_dir: self.www.clone().unwrap_or(defaults.www_dir),
            run_dir: self.run.clone().unwrap_or(defaults.run_dir),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntegritySection {
    pub method: Option<IntegrityCheck>,
}

/// `[check]`: pre-deployment check, e.g. `["python", "manage.py", "check", "--deploy"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    pub command: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmokeSection {
    /// Program used to open the deployed site
    pub browser: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deploy: DeploySection,
    pub paths: PathsSection,
    pub integrity: IntegritySection,
    pub check: CheckSection,
    pub smoke: SmokeSection,
}

/// Values given on the command line; they win over every file and the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecOverrides {
    pub name: Option<String>,
    pub host: Option<String>,
    pub mode: Option<ServingMode>,
    pub log: Option<PathBuf>,
    pub ssl: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown keys as warnings
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Values set in `upper` replace those in `self`
    pub fn merged_with(self, upper: Config) -> Config {
        Config {
            deploy: DeploySection {
                name: upper.deploy.name.or(self.deploy.name),
                id: upper.deploy.id.or(self.deploy.id),
                module: upper.deploy.module.or(self.deploy.module),
                host: upper.deploy.host.or(self.deploy.host),
                log: upper.deploy.log.or(self.deploy.log),
                mode: upper.deploy.mode.or(self.deploy.mode),
            },
            paths: PathsSection {
                systemd: upper.paths.systemd.or(self.paths.systemd),
                nginx: upper.paths.nginx.or(self.paths.nginx),
                www: upper.paths.www.or(self.paths.www),
                run: upper.paths.run.or(self.paths.run),
            },
            integrity: IntegritySection {
                method: upper.integrity.method.or(self.integrity.method),
            },
            check: CheckSection {
                command: upper.check.command.or(self.check.command),
            },
            smoke: SmokeSection {
                browser: upper.smoke.browser.or(self.smoke.browser),
            },
        }
    }

    pub fn integrity(&self) -> IntegrityCheck {
        self.integrity.method.unwrap_or_default()
    }

    pub fn check_command(&self) -> Option<Vec<String>> {
        self.check.command.clone().filter(|argv| !argv.is_empty())
    }

    pub fn browser(&self) -> Option<&str> {
        self.smoke.browser.as_deref()
    }

    pub fn layout(&self) -> HostLayout {
        self.paths.layout()
    }

    /// Build the deployment spec for the project in `source_dir`.
    ///
    /// `deploy.name` must come from somewhere: the command line, the
    /// environment or a configuration file.
    pub fn deployment_spec(
        &self,
        source_dir: &Path,
        overrides: &SpecOverrides,
    ) -> DeployResult<DeploymentSpec> {
        let name = overrides
            .name
            .clone()
            .or_else(|| self.deploy.name.clone())
            .ok_or_else(|| DeployError::MissingSetting {
                key: "deploy.name".to_string(),
                env: loader::ENV_NAME.to_string(),
            })?;

        let mut builder = DeploymentSpec::builder(name, source_dir)
            .with_mode(overrides.mode.or(self.deploy.mode).unwrap_or_default())
            .with_ssl(overrides.ssl)
            .with_layout(self.layout());

        if let Some(id) = &self.deploy.id {
            builder = builder.with_deploy_id(id.clone());
        }
        if let Some(host) = overrides.host.as_ref().or(self.deploy.host.as_ref()) {
            builder = builder.with_host(host.clone());
        }
        if let Some(log) = overrides.log.as_ref().or(self.deploy.log.as_ref()) {
            builder = builder.with_log_path(log.clone());
        }
        if let Some(module) = &self.deploy.module {
            builder = builder.with_module(module.clone());
        }

        builder.build()
    }
}
