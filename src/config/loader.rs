//! Configuration loading logic

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::{IntegrityCheck, ServingMode};
use crate::error::{DeployError, DeployResult};

use super::types::Config;

/// Project configuration file name
pub const PROJECT_FILE: &str = "deploy.toml";

pub const ENV_NAME: &str = "DJANGO_DEPLOY_NAME";
pub const ENV_HOST: &str = "DJANGO_DEPLOY_HOST";
pub const ENV_MODE: &str = "DJANGO_DEPLOY_MODE";
pub const ENV_INTEGRITY: &str = "DJANGO_DEPLOY_INTEGRITY";
pub const ENV_SYSTEMD_DIR: &str = "DJANGO_DEPLOY_SYSTEMD_DIR";
pub const ENV_NGINX_DIR: &str = "DJANGO_DEPLOY_NGINX_DIR";
pub const ENV_WWW_DIR: &str = "DJANGO_DEPLOY_WWW_DIR";
pub const ENV_RUN_DIR: &str = "DJANGO_DEPLOY_RUN_DIR";

/// Unknown key found while loading a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, if the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a configuration file, collecting unknown keys as warnings
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config_dir>/django-deploy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("django-deploy").join("config.toml"))
}

/// Merge defaults, user file, project file and environment (lowest to
/// highest priority).
///
/// An `explicit` project file (given with `--config`) must exist; the
/// implicit `deploy.toml` and the user file are optional.
pub fn load_layered(
    project_file: &Path,
    explicit: bool,
    user_file: Option<&Path>,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let mut config = Config::default();
    let mut warnings = Vec::new();

    if let Some(user) = user_file.filter(|p| p.is_file()) {
        debug!(path = %user.display(), "loading user configuration");
        let (user_config, w) = load_with_warnings(user)?;
        config = config.merged_with(user_config);
        warnings.extend(w);
    }

    if explicit || project_file.is_file() {
        debug!(path = %project_file.display(), "loading project configuration");
        let (project_config, w) = load_with_warnings(project_file)?;
        config = config.merged_with(project_config);
        warnings.extend(w);
    }

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DJANGO_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(name) = get(ENV_NAME) {
        config.deploy.name = Some(name);
    }
    if let Some(host) = get(ENV_HOST) {
        config.deploy.host = Some(host);
    }
    if let Some(mode) = get(ENV_MODE) {
        match mode.parse::<ServingMode>() {
            Ok(mode) => config.deploy.mode = Some(mode),
            Err(e) => warn!("ignoring {}: {}", ENV_MODE, e),
        }
    }
    if let Some(method) = get(ENV_INTEGRITY) {
        match method.parse::<IntegrityCheck>() {
            Ok(method) => config.integrity.method = Some(method),
            Err(e) => warn!("ignoring {}: {}", ENV_INTEGRITY, e),
        }
    }
    if let Some(dir) = get(ENV_SYSTEMD_DIR) {
        config.paths.systemd = Some(PathBuf::from(dir));
    }
    if let Some(dir) = get(ENV_NGINX_DIR) {
        config.paths.nginx = Some(PathBuf::from(dir));
    }
    if let Some(dir) = get(ENV_WWW_DIR) {
        config.paths.www = Some(PathBuf::from(dir));
    }
    if let Some(dir) = get(ENV_RUN_DIR) {
        config.paths.run = Some(PathBuf::from(dir));
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy", "name", "id", "module", "host", "log", "mode", "paths", "systemd", "nginx",
        "www", "run", "integrity", "method", "check", "command", "smoke", "browser",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
