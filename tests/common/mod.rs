//! Common test utilities for django-deploy integration tests.
//!
//! This module provides:
//! - `HostFixture`: a temporary host root plus a Django project to deploy
//! - `RecordingRunner`: command runner that records commands and performs
//!   link/copy on the real filesystem
//! - `FakeEnvironment`: privilege and confirmation answers
//! - `CliEnv`: runs the binary with its configuration isolated

pub mod cli;
pub mod host;

pub use cli::*;
pub use host::*;
