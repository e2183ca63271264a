//! django-deploy - one-shot deployment of Django projects
//!
//! Renders a systemd service and socket unit plus an nginx vhost for a
//! Django project, installs them without overwriting anything, places the
//! project under the web root and starts serving it.
//!
//! ## Layers
//!
//! - `domain` - Deployment entities, rendering, host inspection and the ports
//! - `application` - Deploy, status and diff use cases
//! - `infrastructure` - Local filesystem, system commands, terminal
//! - `config` - Layered TOML configuration
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::{Config, SpecOverrides};
pub use domain::entities::{DeploymentSpec, RenderedArtifactSet};
pub use domain::services::render;
pub use domain::value_objects::{DeployId, FailLevel, HostLayout, IntegrityCheck, ServingMode};
pub use error::{DeployError, DeployResult};
