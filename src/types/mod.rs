// Start page shared type definitions
// Each submodule defines types used across the crate.

pub mod engine;
pub mod errors;
pub mod event;
pub mod link;
pub mod settings;
