//! Command entry points
//!
//! Each command resolves configuration, wires its use case through the
//! presentation factory and renders the outcome.

pub mod generate;

pub use generate::cmd_generate;
