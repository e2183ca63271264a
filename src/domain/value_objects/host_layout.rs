//! Host filesystem layout value object.

use std::path::{Path, PathBuf};

/// Roots under which artifacts and the project are placed.
///
/// Defaults match a Debian-style host. Tests and unusual hosts override
/// them through configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLayout {
    /// systemd configuration root (units live in `<root>/system`)
    pub systemd_dir: PathBuf,
    /// nginx configuration root (`sites-available` / `sites-enabled`)
    pub nginx_dir: PathBuf,
    /// Serving root; the project lands in `<root>/<app>`
    pub www_dir: PathBuf,
    /// Runtime directory holding the UNIX socket
    pub run_dir: PathBuf,
}

impl HostLayout {
    pub const DEFAULT_SYSTEMD_DIR: &'static str = "/etc/systemd";
    pub const DEFAULT_NGINX_DIR: &'static str = "/etc/nginx";
    pub const DEFAULT_WWW_DIR: &'static str = "/var/www";
    pub const DEFAULT_RUN_DIR: &'static str = "/run";

    /// Layout with every root placed under `base` (used by tests and
    /// staging hosts)
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            systemd_dir: base.join("etc/systemd"),
            nginx_dir: base.join("etc/nginx"),
            www_dir: base.join("var/www"),
            run_dir: base.join("run"),
        }
    }

    pub fn unit_dir(&self) -> PathBuf {
        self.systemd_dir.join("system")
    }

    pub fn sites_available_dir(&self) -> PathBuf {
        self.nginx_dir.join("sites-available")
    }

    pub fn sites_enabled_dir(&self) -> PathBuf {
        self.nginx_dir.join("sites-enabled")
    }
}

impl Default for HostLayout {
    fn default() -> Self {
        Self {
            systemd_dir: PathBuf::from(Self::DEFAULT_SYSTEMD_DIR),
            nginx_dir: PathBuf::from(Self::DEFAULT_NGINX_DIR),
            www_dir: PathBuf::from(Self::DEFAULT_WWW_DIR),
            run_dir: PathBuf::from(Self::DEFAULT_RUN_DIR),
        }
    }
}
