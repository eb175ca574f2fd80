//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks record every call so tests can assert on fetch counts, writes
//! and presentation decisions without a browser or network.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
