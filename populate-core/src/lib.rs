//! Core functionality for populate.
//!
//! This crate provides the generation engine: value generators, the
//! structural classification of target containers, and the population
//! strategy for each container shape.

pub mod data;
pub mod engine;
pub mod error;
pub mod gen;
pub mod shape;
mod strategy;

// Re-export the main types
pub use data::*;
pub use engine::*;
pub use error::*;
pub use gen::*;
pub use shape::*;
