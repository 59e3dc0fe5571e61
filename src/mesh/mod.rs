//! CPU-side mesh types and generators.
//!
//! This module provides the host-agnostic mesh data structures consumed by
//! the exporter:
//!
//! - [`TriMesh`] - Plain-data triangulated mesh
//! - [`LoopColorLayer`] / [`LoopUvLayer`] - Per-loop (face corner) attribute
//!   layers
//! - Generators for common shapes (quad, UV sphere)

mod data;
pub mod generators;

pub use data::{LoopColorLayer, LoopUvLayer, TriMesh};
