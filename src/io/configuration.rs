//! Analysis constants and runtime configuration defaults

// Tileset layout defaults
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: usize = 32;
/// Default number of base tiles seeding the palette from the first tileset row
pub const DEFAULT_BASE_TILES: usize = 1;

// Corner classification
/// Edge length of the pixel square sampled at each tile corner
pub const CORNER_SAMPLE_RADIUS: usize = 4;

/// Standard deviation floor, in 8-bit channel units, added before Gaussian scoring
///
/// Two flat colors are merged when they differ by less than roughly six
/// units in a single channel.
pub const SIGMA_FLOOR: f64 = 3.0;

/// Minimum Gaussian overlap for a corner to join an existing material
pub const MATCH_FLOOR: f64 = 0.01;

/// Number of distinct material ids a selector code field can hold
pub const MAX_MATERIALS: usize = 256;

// Cell generation
/// Number of stacked output layers per map
pub const DEFAULT_DEPTH_LAYERS: usize = 4;

/// Fixed seed for reproducible previews and variant picks
pub const DEFAULT_SEED: u64 = 42;

// Preview painting
/// Default preview map width in cells
pub const DEFAULT_PREVIEW_WIDTH: usize = 24;
/// Default preview map height in cells
pub const DEFAULT_PREVIEW_HEIGHT: usize = 16;
/// Number of random strokes painted onto a preview map
pub const PREVIEW_STROKES: usize = 12;
/// Largest stroke or circle radius used in previews, in cells
pub const PREVIEW_MAX_RADIUS: f32 = 3.5;

// Output settings
/// Suffix added to mapping dump filenames
pub const MAPPING_SUFFIX: &str = "_mapping";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
