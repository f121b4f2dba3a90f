//! Mathematical utilities for rasterization and corner classification

/// Planar distance helpers for point and segment coverage tests
pub mod geometry;
/// Gaussian densities and overlap scores for color clustering
pub mod probability;
