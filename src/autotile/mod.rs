//! Dual-corner Wang autotiling over painted marker layers

/// Multi-material decomposition into pairwise and single-material tiles
pub mod decompose;
/// Depth-layered cell generation from marker layers
pub mod generator;
/// Selector code to tile position lookup tables
pub mod mapping;
/// Material ids and fixed-size material sets
pub mod materials;
/// Corner conventions, selector codes and the corner selector
pub mod selector;

pub use generator::{OutputCell, Tilemap};
pub use mapping::{TileMapping, TilePosition};
pub use materials::{MaterialId, MaterialSet};
pub use selector::{Autotile, Corner, SelectorCode};
