//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Precheck, render, resolve, install, materialize, activate
//! - `StatusUseCase` - Read-only preview of what a deploy would do
//! - `DiffUseCase` - Rendered artifacts against installed files

pub mod deploy;
pub mod diff;
pub mod status;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase};
pub use diff::{ArtifactChange, ArtifactDiff, DiffUseCase};
pub use status::{ArtifactStatus, StatusReport, StatusUseCase};
