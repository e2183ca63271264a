//! Host Environment Implementations

mod host;

pub use host::SystemEnvironment;
