//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `command/` - systemctl, nginx and friends as child processes
//! - `environment/` - Privilege and confirmation on the real host
//! - `events/` - Console and NDJSON event sinks

pub mod command;
pub mod environment;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use command::{SystemRunner, DEFAULT_BROWSER};
pub use environment::SystemEnvironment;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
