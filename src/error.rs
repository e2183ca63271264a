//! Error types for django-deploy
//!
//! Every fatal condition of the deployment pipeline is a distinct variant so
//! the binary can map it to a stable exit code. Port-level failures
//! (`FsError`, `CommandFailure`) are carried as sources.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::{CommandFailure, FsError};

/// Result type alias for deployment operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Supervisor step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorStage {
    /// `daemon-reload` after the unit files were written
    Reload,
    /// Starting the generated unit
    Start,
}

impl fmt::Display for SupervisorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupervisorStage::Reload => write!(f, "configuration reload"),
            SupervisorStage::Start => write!(f, "unit start"),
        }
    }
}

/// Reverse proxy step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyStage {
    /// Configuration syntax check
    Validate,
    /// Restart with the new vhost
    Reload,
}

impl fmt::Display for ProxyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyStage::Validate => write!(f, "configuration check"),
            ProxyStage::Reload => write!(f, "reload"),
        }
    }
}

/// Main error type for deployment operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Not running as root
    #[error("insufficient privilege: please run as root")]
    InsufficientPrivilege,

    /// Supervisor configuration root is missing
    #[error("systemd configuration path not found: {}", .path.display())]
    MissingConfigRoot { path: PathBuf },

    /// Pre-deployment check command rejected the project
    #[error("pre-deployment check failed")]
    CheckFailed(#[source] CommandFailure),

    /// Artifacts for this identifier are already installed
    #[error(
        "service or socket already exists, please use a different name (current name: {deploy_id}, existing file: {})",
        .path.display()
    )]
    AlreadyDeployed { deploy_id: String, path: PathBuf },

    /// Create-exclusive write failed
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Removing a previous artifact or serving entry failed
    #[error("failed to remove {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Serving path holds something that must not be deleted automatically
    #[error(
        "{} is a {kind} and will not be removed automatically, please delete it manually",
        .path.display()
    )]
    MaterializeRefused { path: PathBuf, kind: String },

    /// Linking or copying the project failed
    #[error("cannot place project at {}: {reason}", .path.display())]
    Materialize { path: PathBuf, reason: String },

    /// systemd rejected a reload or start
    #[error("systemd {stage} failed")]
    Supervisor {
        stage: SupervisorStage,
        #[source]
        source: CommandFailure,
    },

    /// nginx rejected the configuration or failed to restart
    #[error("nginx {stage} failed")]
    Proxy {
        stage: ProxyStage,
        #[source]
        source: CommandFailure,
    },

    /// Deployment identifier cannot namespace host artifacts
    #[error("invalid deployment identifier '{raw}': {reason}")]
    InvalidDeployId { raw: String, reason: String },

    /// Host name cannot be used as an nginx server name
    #[error("invalid host '{raw}': {reason}")]
    InvalidHost { raw: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// Required setting has no value in any configuration layer
    #[error("missing required setting '{key}' (set it in deploy.toml or via {env})")]
    MissingSetting { key: String, env: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit code observed by callers.
    ///
    /// `2` means "pick another identifier or pass --fresh"; `3`, `5` and `6`
    /// name the external system that rejected the deployment.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::AlreadyDeployed { .. } => 2,
            DeployError::Proxy { .. } => 3,
            DeployError::Supervisor {
                stage: SupervisorStage::Start,
                ..
            } => 5,
            DeployError::Supervisor {
                stage: SupervisorStage::Reload,
                ..
            } => 6,
            _ => 1,
        }
    }

    /// Short stage tag used in JSON output
    pub fn stage(&self) -> &'static str {
        match self {
            DeployError::InsufficientPrivilege
            | DeployError::MissingConfigRoot { .. }
            | DeployError::CheckFailed(_) => "precheck",
            DeployError::AlreadyDeployed { .. } => "conflict",
            DeployError::Write { .. } => "install",
            DeployError::Remove { .. } => "remove",
            DeployError::MaterializeRefused { .. } | DeployError::Materialize { .. } => {
                "materialize"
            }
            DeployError::Supervisor { .. } => "supervisor",
            DeployError::Proxy { .. } => "proxy",
            DeployError::InvalidDeployId { .. }
            | DeployError::InvalidHost { .. }
            | DeployError::Config { .. }
            | DeployError::MissingSetting { .. } => "config",
            DeployError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> CommandFailure {
        CommandFailure::new("systemctl start demo_django_asgi", Some(1), "unit not found")
    }

    #[test]
    fn exit_codes_follow_stage() {
        let abort = DeployError::AlreadyDeployed {
            deploy_id: "demo".to_string(),
            path: PathBuf::from("/etc/systemd/system/demo_django_asgi.service"),
        };
        assert_eq!(abort.exit_code(), 2);

        let proxy = DeployError::Proxy {
            stage: ProxyStage::Validate,
            source: failure(),
        };
        assert_eq!(proxy.exit_code(), 3);

        let start = DeployError::Supervisor {
            stage: SupervisorStage::Start,
            source: failure(),
        };
        assert_eq!(start.exit_code(), 5);

        let reload = DeployError::Supervisor {
            stage: SupervisorStage::Reload,
            source: failure(),
        };
        assert_eq!(reload.exit_code(), 6);

        assert_eq!(DeployError::InsufficientPrivilege.exit_code(), 1);
    }

    #[test]
    fn abort_message_names_identifier() {
        let err = DeployError::AlreadyDeployed {
            deploy_id: "demo".to_string(),
            path: PathBuf::from("/etc/nginx/sites-available/demo_django_asgi"),
        };
        let msg = err.to_string();
        assert!(msg.contains("current name: demo"));
        assert!(msg.contains("sites-available/demo_django_asgi"));
    }

    #[test]
    fn refusal_mentions_manual_action() {
        let err = DeployError::MaterializeRefused {
            path: PathBuf::from("/var/www/Demo"),
            kind: "directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "/var/www/Demo is a directory and will not be removed automatically, please delete it manually"
        );
        assert_eq!(err.stage(), "materialize");
    }
}
