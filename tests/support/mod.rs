//! Test support utilities for cloudcheck integration tests.
//!
//! Provides isolated command setup and output assertions.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;

/// Test environment for running the check binaries.
///
/// Each command starts from a scrubbed environment for the variables the
/// checks read, so tests don't depend on the developer's shell and can run
/// in parallel.
pub struct Test;

impl Test {
    pub fn new() -> Self {
        Self
    }
}
