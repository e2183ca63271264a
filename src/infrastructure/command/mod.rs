//! Command Runner Implementations

mod system;

pub use system::{SystemRunner, DEFAULT_BROWSER};
