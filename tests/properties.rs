//! Property tests for django-deploy.
//!
//! Properties use randomized specs to protect invariants of the pure parts
//! of the pipeline: rendering, identifier normalization and the
//! resolution and materialization decision tables.
//!
//! Run with: cargo test --test properties

#[path = "properties/renderer.rs"]
mod renderer;

#[path = "properties/decisions.rs"]
mod decisions;
