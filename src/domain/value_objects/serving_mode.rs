//! Serving mode value object.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Worker protocol for the application server.
///
/// - `Wsgi`: synchronous gunicorn worker pool
/// - `Asgi`: uvicorn workers under gunicorn (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServingMode {
    Wsgi,
    #[default]
    Asgi,
}

impl ServingMode {
    /// Fixed worker count used in asgi mode
    pub const ASGI_WORKERS: u32 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            ServingMode::Wsgi => "wsgi",
            ServingMode::Asgi => "asgi",
        }
    }

    /// Extra gunicorn arguments selecting the worker pool
    pub fn worker_args(&self) -> Vec<String> {
        match self {
            ServingMode::Wsgi => Vec::new(),
            ServingMode::Asgi => vec![
                "-k".to_string(),
                "uvicorn.workers.UvicornWorker".to_string(),
                "--workers".to_string(),
                Self::ASGI_WORKERS.to_string(),
            ],
        }
    }

    pub fn all() -> [ServingMode; 2] {
        [ServingMode::Wsgi, ServingMode::Asgi]
    }
}

impl fmt::Display for ServingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wsgi" => Ok(ServingMode::Wsgi),
            "asgi" => Ok(ServingMode::Asgi),
            other => Err(format!("unknown serving mode '{}' (expected wsgi or asgi)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asgi_is_default() {
        assert_eq!(ServingMode::default(), ServingMode::Asgi);
    }

    #[test]
    fn only_asgi_has_worker_flags() {
        assert!(ServingMode::Wsgi.worker_args().is_empty());
        assert_eq!(
            ServingMode::Asgi.worker_args().join(" "),
            "-k uvicorn.workers.UvicornWorker --workers 3"
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("WSGI".parse::<ServingMode>(), Ok(ServingMode::Wsgi));
        assert_eq!(" asgi ".parse::<ServingMode>(), Ok(ServingMode::Asgi));
        assert!("fastcgi".parse::<ServingMode>().is_err());
    }
}
