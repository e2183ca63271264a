//! Domain Entities
//!
//! Values created once per invocation and discarded at its end. The files
//! they describe on the host are the only durable record of a deployment.

mod artifact_set;
mod deployment_spec;
mod host_state;

pub use artifact_set::{Artifact, ArtifactKind, RenderedArtifactSet};
pub use deployment_spec::{DeploymentSpec, DeploymentSpecBuilder};
pub use host_state::HostState;
