//! Command-line support for the `trapdecode` tool.
//!
//! Enabled with the `cli` feature.

pub mod args;
pub mod output;
