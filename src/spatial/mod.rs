//! Spatial data structures for marker painting
//!
//! This module contains spatial-related functionality including:
//! - Typed 2D layers with permissive bounds handling
//! - Line, stroke, circle and polygon rasterization onto layers

/// Layer storage, bounds-checked access and rectangle fills
pub mod layer;
/// Rasterization primitives implemented on layers
pub mod raster;

pub use layer::{Layer, LayerGeometry};
