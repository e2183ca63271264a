//! DeploymentSpec entity - immutable input of the deployment pipeline.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{DeployId, HostLayout, ServingMode};
use crate::error::{DeployError, DeployResult};

/// Everything the pipeline needs to know about one deployment.
///
/// Built through [`DeploymentSpec::builder`], which fills in the same
/// defaults the CLI documents (host `<name>.localhost`, log file under
/// `/tmp`, module named after the project directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSpec {
    app_name: String,
    deploy_id: DeployId,
    host: String,
    mode: ServingMode,
    log_path: PathBuf,
    source_dir: PathBuf,
    module: String,
    ssl: bool,
    layout: HostLayout,
}

impl DeploymentSpec {
    pub fn builder(
        app_name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> DeploymentSpecBuilder {
        DeploymentSpecBuilder::new(app_name, source_dir)
    }

    /// Display name; keeps its case and names the serving directory
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn deploy_id(&self) -> &DeployId {
        &self.deploy_id
    }

    /// Host name served by the vhost (lowercase)
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn mode(&self) -> ServingMode {
        self.mode
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Python package holding `wsgi.py` / `asgi.py`
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn ssl(&self) -> bool {
        self.ssl
    }

    pub fn layout(&self) -> &HostLayout {
        &self.layout
    }

    /// `<id>_django_<mode>`: unit name and file stem of every artifact
    pub fn service_name(&self) -> String {
        format!("{}_django_{}", self.deploy_id, self.mode)
    }

    /// UNIX socket shared by the socket unit, the service and the vhost
    pub fn socket_path(&self) -> PathBuf {
        self.layout
            .run_dir
            .join(format!("{}.sock", self.service_name()))
    }

    /// Where the project is materialized on the host
    pub fn serving_dir(&self) -> PathBuf {
        self.layout.www_dir.join(&self.app_name)
    }

    pub fn url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}", scheme, self.host)
    }
}

/// Builder for [`DeploymentSpec`]
#[derive(Debug, Clone)]
pub struct DeploymentSpecBuilder {
    app_name: String,
    source_dir: PathBuf,
    deploy_id: Option<String>,
    host: Option<String>,
    mode: ServingMode,
    log_path: Option<PathBuf>,
    module: Option<String>,
    ssl: bool,
    layout: HostLayout,
}

impl DeploymentSpecBuilder {
    fn new(app_name: impl Into<String>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            source_dir: source_dir.into(),
            deploy_id: None,
            host: None,
            mode: ServingMode::default(),
            log_path: None,
            module: None,
            ssl: false,
            layout: HostLayout::default(),
        }
    }

    /// Explicit identifier; defaults to the lowercased application name
    pub fn with_deploy_id(mut self, id: impl Into<String>) -> Self {
        self.deploy_id = Some(id.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_mode(mut self, mode: ServingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_layout(mut self, layout: HostLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> DeployResult<DeploymentSpec> {
        let raw_id = self.deploy_id.as_deref().unwrap_or(self.app_name.as_str());
        let deploy_id = DeployId::parse(raw_id)?;

        // The name becomes a directory under the serving root.
        let app_name = self.app_name.trim().to_string();
        if app_name.is_empty() || app_name == "." || app_name == ".." || app_name.contains('/') {
            return Err(DeployError::InvalidDeployId {
                raw: self.app_name.clone(),
                reason: "application name must be a single path component".to_string(),
            });
        }

        let host = self
            .host
            .unwrap_or_else(|| format!("{}.localhost", app_name))
            .trim()
            .to_lowercase();
        validate_host(&host)?;

        let log_path = self.log_path.unwrap_or_else(|| {
            PathBuf::from(format!("/tmp/{}_django_{}", deploy_id, self.mode))
        });

        let module = self.module.unwrap_or_else(|| {
            self.source_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| app_name.clone())
        });

        Ok(DeploymentSpec {
            app_name,
            deploy_id,
            host,
            mode: self.mode,
            log_path,
            source_dir: self.source_dir,
            module,
            ssl: self.ssl,
            layout: self.layout,
        })
    }
}

/// The host lands verbatim in `server_name` and the certificate path.
fn validate_host(host: &str) -> DeployResult<()> {
    let invalid = |reason: String| {
        Err(DeployError::InvalidHost {
            raw: host.to_string(),
            reason,
        })
    };

    if host.is_empty() {
        return invalid("host must not be empty".to_string());
    }
    if let Some(bad) = host
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return invalid(format!("character '{}' is not allowed", bad));
    }
    if host.starts_with(['.', '-']) || host.ends_with(['.', '-']) || host.contains("..") {
        return invalid("labels must not be empty or start or end with '-'".to_string());
    }
    Ok(())
}
