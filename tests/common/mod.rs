//! Common test utilities for CEML integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directory plus helpers to run the `ceml` binary
//! - Fixtures: the sample model as YAML text and as a built `Economy`

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
