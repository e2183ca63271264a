//! Terminal output helpers for the binary

pub mod components;
pub mod error;
pub mod json;
pub mod terminal;
pub mod theme;
