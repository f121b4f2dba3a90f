//! Dual-corner Wang autotiling driven by statistical tileset analysis
//!
//! Materials are painted as markers on a vertex grid. Each map cell picks the
//! tile whose four corners match the materials on its four vertices, and the
//! table from corner combinations to tiles is inferred from the tileset image
//! itself by clustering sampled corner colors.

#![forbid(unsafe_code)]

/// Selector codes, multi-material decomposition and cell generation
pub mod autotile;
/// Tileset corner sampling, material clustering and mapping inference
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for geometry and Gaussian scoring
pub mod math;
/// Typed 2D layers and rasterization primitives
pub mod spatial;

pub use io::error::{AutotileError, Result};
