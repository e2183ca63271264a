//! Deployment identifier value object.
//!
//! The identifier is the only namespacing token for everything written to
//! the host: unit names, socket paths and vhost file names. Two deployments
//! sharing an identifier collide.

use std::fmt;

use crate::error::{DeployError, DeployResult};

/// Normalized (lowercase, non-empty) deployment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployId(String);

impl DeployId {
    /// Normalize and validate a raw name.
    ///
    /// Surrounding whitespace is trimmed and the result is lowercased. Only
    /// ASCII alphanumerics, `-`, `_` and `.` are accepted because the value
    /// ends up in file names and systemd unit names.
    pub fn parse(raw: &str) -> DeployResult<Self> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(invalid(raw, "identifier must not be empty"));
        }
        if normalized.starts_with('.') {
            return Err(invalid(raw, "identifier must not start with '.'"));
        }
        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(raw, &format!("character '{}' is not allowed", bad)));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(raw: &str, reason: &str) -> DeployError {
    DeployError::InvalidDeployId {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for DeployId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeployId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
