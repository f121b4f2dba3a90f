//! Input/output: command line, configuration, errors and file formats

/// Command-line interface and batch processing of tileset images
pub mod cli;
/// Configuration constants for analysis, generation and previews
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Tileset decoding and PNG export
pub mod image;
/// Plain-text dump of an analyzed tileset
pub mod mapping;
/// Seeded random marker painting for previews
pub mod preview;
/// Multi-file progress display
pub mod progress;
/// Compositing generated depth layers into an image
pub mod render;
