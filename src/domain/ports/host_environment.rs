//! Host Environment Port
//!
//! Privilege detection and operator confirmation are environment concerns.
//! They are injected into the deploy use case so tests never need root or a
//! TTY.

/// Capabilities the deploy use case asks of its environment
pub trait HostEnvironment {
    /// Whether the process may write system configuration (effective root)
    fn has_elevated_access(&self) -> bool;

    /// Ask the operator to continue. Blocks until answered.
    fn confirm(&self, prompt: &str) -> bool;
}
