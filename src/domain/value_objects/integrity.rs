//! Integrity check selection for the served project copy.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the inspector decides that the serving directory matches the source.
///
/// `Size` compares total tree sizes in 10-byte buckets. It is cheap and can
/// report two different trees of the same size as identical; existing
/// deployments rely on it, so it stays the default. `Digest` hashes every
/// file and must be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityCheck {
    #[default]
    Size,
    Digest,
}

impl fmt::Display for IntegrityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityCheck::Size => f.write_str("size"),
            IntegrityCheck::Digest => f.write_str("digest"),
        }
    }
}

impl FromStr for IntegrityCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "size" => Ok(IntegrityCheck::Size),
            "digest" | "sha256" => Ok(IntegrityCheck::Digest),
            other => Err(format!("unknown integrity method '{}'", other)),
        }
    }
}
