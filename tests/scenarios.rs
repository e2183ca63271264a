//! Scenario tests for django-deploy.
//!
//! Each scenario drives the deploy use case end to end against a temporary
//! host root with the real filesystem adapter. Supervisor and proxy
//! commands are recorded instead of executed.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/first_deploy.rs"]
mod first_deploy;

#[path = "scenarios/redeploy.rs"]
mod redeploy;

#[path = "scenarios/failures.rs"]
mod failures;
