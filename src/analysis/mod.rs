//! Tileset analysis: deriving selector codes from tile artwork

/// Corner sampling and color characters
pub mod character;
/// Tile grid geometry over a tileset image
pub mod layout;
/// Online material clustering with Gaussian overlap scores
pub mod palette;
/// Row-by-row template analysis producing the tile mapping
pub mod template;

pub use layout::{TileLayout, TilesetImage};
pub use template::{AnalyzerConfig, TemplateAnalysis, TemplateAnalyzer, analyze_tileset};
