//! Deploy Module
//!
//! Orchestrates one deployment of a project onto the local host.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployReport`)
//! - `use_case` - Pipeline orchestration (`DeployUseCase`)
//! - `install`, `materialize`, `activate` - the side-effecting stages
//!
//! ## Usage
//!
//! ```ignore
//! use django_deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, runner, environment);
//! let report = use_case.execute(&spec, &DeployOptions::new().with_fresh(true))?;
//! ```

mod activate;
mod install;
mod materialize;
mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployReport;
pub use use_case::DeployUseCase;
