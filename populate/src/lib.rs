//! Populate: random containers for tests.
//!
//! This is the main entry point for the library, providing value
//! generators and an [`Engine`] that fills sequences, fixed-size arrays,
//! sets and maps with random values under size and range constraints.

pub use populate_core::*;

// Re-export derive macros when available
#[cfg(feature = "derive")]
pub use populate_derive::*;
