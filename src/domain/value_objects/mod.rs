//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deploy_id;
mod fail_level;
mod host_layout;
mod integrity;
mod serving_mode;

pub use deploy_id::DeployId;
pub use fail_level::FailLevel;
pub use host_layout::HostLayout;
pub use integrity::IntegrityCheck;
pub use serving_mode::ServingMode;
