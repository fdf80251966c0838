//! Shared harness for registry store integration tests.

pub mod fixtures;
mod registry;

pub use registry::TestRegistry;
