//! Message level passed to the pre-deployment check.

use std::fmt;

/// Level at which the pre-deployment check exits non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailLevel {
    #[value(name = "CRITICAL")]
    Critical,
    #[default]
    #[value(name = "ERROR")]
    Error,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

impl FailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailLevel::Critical => "CRITICAL",
            FailLevel::Error => "ERROR",
            FailLevel::Warning => "WARNING",
            FailLevel::Info => "INFO",
            FailLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for FailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
