//! Domain Services
//!
//! Decision logic of the deployment pipeline. Rendering, resolving and
//! planning are pure; inspection only reads through the `FileSystem` port.

pub mod inspector;
pub mod materialize_planner;
pub mod renderer;
pub mod resolver;

pub use inspector::{inspect, size_bucket};
pub use materialize_planner::{plan_materialize, MaterializeOutcome, MaterializePlan};
pub use renderer::{render, render_service_unit, render_socket_unit, render_vhost};
pub use resolver::{resolve, Resolution};
