//! Configuration module for django-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DJANGO_DEPLOY_*)
//! 3. Project config (`<project>/deploy.toml` or `--config`)
//! 4. User config (`<config_dir>/django-deploy/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, with_env_overrides, ConfigWarning, ENV_HOST, ENV_INTEGRITY,
    ENV_MODE, ENV_NAME, ENV_NGINX_DIR, ENV_RUN_DIR, ENV_SYSTEMD_DIR, ENV_WWW_DIR, PROJECT_FILE,
};
pub use types::{
    CheckSection, Config, DeploySection, IntegritySection, PathsSection, SmokeSection,
    SpecOverrides,
};
