//! Domain Layer
//!
//! The deployment reconciliation logic, free of concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - DeploymentSpec, RenderedArtifactSet, HostState
//! - `value_objects/` - DeployId, ServingMode, HostLayout, IntegrityCheck
//! - `services/` - Renderer, Inspector, Resolver, materialize planning
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - host access goes through `FileSystem` and `CommandRunner`
//! 2. **Pure decisions** - rendering, resolution and planning are plain functions
//! 3. **Ports & Adapters** - environment capabilities are injected

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
