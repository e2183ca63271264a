//! Rendered artifact set entity.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which generated file an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// systemd `.service` unit
    ServiceUnit,
    /// systemd `.socket` unit
    SocketUnit,
    /// nginx vhost in `sites-available`
    VhostAvailable,
    /// copy of the vhost in `sites-enabled`
    VhostEnabled,
}

impl ArtifactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::ServiceUnit => "service",
            ArtifactKind::SocketUnit => "socket",
            ArtifactKind::VhostAvailable => "nginx site",
            ArtifactKind::VhostEnabled => "nginx enabled site",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated file and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The three rendered artifacts plus the derived `sites-enabled` path.
///
/// Produced once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifactSet {
    service: Artifact,
    socket: Artifact,
    vhost: Artifact,
    vhost_enabled_path: PathBuf,
}

impl RenderedArtifactSet {
    pub fn new(
        service: Artifact,
        socket: Artifact,
        vhost: Artifact,
        vhost_enabled_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            service,
            socket,
            vhost,
            vhost_enabled_path: vhost_enabled_path.into(),
        }
    }

    pub fn service(&self) -> &Artifact {
        &self.service
    }

    pub fn socket(&self) -> &Artifact {
        &self.socket
    }

    pub fn vhost(&self) -> &Artifact {
        &self.vhost
    }

    pub fn vhost_enabled_path(&self) -> &Path {
        &self.vhost_enabled_path
    }

    /// Paths whose presence means "already deployed under this identifier"
    pub fn guarded_paths(&self) -> [&Path; 3] {
        [&self.service.path, &self.socket.path, &self.vhost.path]
    }

    /// Every path written on install, in write order
    pub fn all_paths(&self) -> [&Path; 4] {
        [
            &self.service.path,
            &self.socket.path,
            &self.vhost.path,
            &self.vhost_enabled_path,
        ]
    }

    /// Files to write on install, in order. The enabled site is a copy of
    /// the available one rather than a symlink.
    pub fn files(&self) -> Vec<Artifact> {
        vec![
            self.service.clone(),
            self.socket.clone(),
            self.vhost.clone(),
            Artifact::new(
                ArtifactKind::VhostEnabled,
                self.vhost_enabled_path.clone(),
                self.vhost.content.clone(),
            ),
        ]
    }
}
