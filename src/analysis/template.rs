//! Inferring the selector code of every tile in a tileset image
//!
//! Instead of a hand-written Wang table, the analyzer looks at the artwork:
//! every tile's four corners are characterized, clustered into materials, and
//! packed into the selector code the tile realizes. Base tiles are
//! characterized first so that the background material always gets id 0.

use crate::analysis::character::characterize_corner;
use crate::analysis::layout::{TileLayout, TilesetImage, image_size};
use crate::analysis::palette::Palette;
use crate::autotile::mapping::{TileMapping, TilePosition};
use crate::autotile::materials::MaterialId;
use crate::autotile::selector::{Corner, SelectorCode};
use crate::io::configuration::{CORNER_SAMPLE_RADIUS, MATCH_FLOOR, MAX_MATERIALS, SIGMA_FLOOR};
use crate::io::error::{Result, invalid_parameter};

/// Tunable parameters of corner classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyzerConfig {
    /// Edge length of the pixel square sampled at each corner
    pub corner_sample_radius: usize,
    /// Standard deviation floor in 8-bit channel units
    pub sigma_floor: f64,
    /// Minimum Gaussian overlap, in `(0, 1]`, to reuse a material
    pub match_floor: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            corner_sample_radius: CORNER_SAMPLE_RADIUS,
            sigma_floor: SIGMA_FLOOR,
            match_floor: MATCH_FLOOR,
        }
    }
}

impl AnalyzerConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the sample radius is zero, the sigma floor is not a
    /// positive finite number, or the match floor lies outside `(0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.corner_sample_radius == 0 {
            return Err(invalid_parameter(
                "corner_sample_radius",
                &self.corner_sample_radius,
                &"at least one pixel must be sampled",
            ));
        }
        if !self.sigma_floor.is_finite() || self.sigma_floor <= 0.0 {
            return Err(invalid_parameter(
                "sigma_floor",
                &self.sigma_floor,
                &"must be a positive finite number",
            ));
        }
        if !(self.match_floor > 0.0 && self.match_floor <= 1.0) {
            return Err(invalid_parameter(
                "match_floor",
                &self.match_floor,
                &"must lie in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Outcome of analyzing one tileset
#[derive(Debug, Clone)]
pub struct TemplateAnalysis {
    /// Selector code to tile positions
    pub mapping: TileMapping,
    /// Materials discovered, indexed by material id
    pub palette: Palette,
    /// Tileset size in whole tiles as `[columns, rows]`
    pub grid_size: [usize; 2],
}

impl TemplateAnalysis {
    /// Tiles per tileset row
    pub const fn columns(&self) -> usize {
        self.grid_size[0]
    }

    /// Material ids that can be painted, i.e. every id except the background
    pub fn paintable_materials(&self) -> Vec<MaterialId> {
        (1..self.palette.len())
            .filter_map(|index| MaterialId::try_from(index).ok())
            .collect()
    }
}

/// Row-by-row tileset analysis
///
/// Construction seeds the palette from the base tiles; each call to
/// [`TemplateAnalyzer::analyze_row`] classifies one row of tiles, so callers
/// can report progress between rows.
pub struct TemplateAnalyzer<'a> {
    image: &'a TilesetImage,
    layout: TileLayout,
    config: AnalyzerConfig,
    grid_size: [usize; 2],
    palette: Palette,
    mapping: TileMapping,
    next_row: usize,
}

impl<'a> TemplateAnalyzer<'a> {
    /// Prepare an analysis and seed the palette from `base_tiles`
    ///
    /// Each base tile contributes the character of its upper-left corner, in
    /// order, so palette ids `0..base_tiles.len()` are fixed before any tile is
    /// classified.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - More base tiles are given than there are material ids
    /// - A base tile lies outside the tileset's tile grid
    pub fn new(
        image: &'a TilesetImage,
        layout: TileLayout,
        base_tiles: &[TilePosition],
        config: AnalyzerConfig,
    ) -> Result<Self> {
        config.validate()?;

        if base_tiles.len() > MAX_MATERIALS {
            return Err(invalid_parameter(
                "base_tiles",
                &base_tiles.len(),
                &format!("at most {MAX_MATERIALS} base tiles are supported"),
            ));
        }

        let grid_size = layout.grid_size(image_size(image));
        let mut palette = Palette::new(config.sigma_floor, config.match_floor);

        for &tile in base_tiles {
            if tile[0] >= grid_size[0] || tile[1] >= grid_size[1] {
                return Err(invalid_parameter(
                    "base_tiles",
                    &format!("[{}, {}]", tile[0], tile[1]),
                    &format!(
                        "outside the {}x{} tile grid",
                        grid_size[0], grid_size[1]
                    ),
                ));
            }
            let character = characterize_corner(
                image,
                &layout,
                tile,
                Corner::UpperLeft,
                config.corner_sample_radius,
            );
            palette.seed(character);
        }

        Ok(Self {
            image,
            layout,
            config,
            grid_size,
            palette,
            mapping: TileMapping::new(),
            next_row: 0,
        })
    }

    /// Tileset size in whole tiles as `[columns, rows]`
    pub const fn grid_size(&self) -> [usize; 2] {
        self.grid_size
    }

    /// Materials discovered so far
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mapping built so far
    pub const fn mapping(&self) -> &TileMapping {
        &self.mapping
    }

    /// Number of tile rows already classified
    pub const fn rows_analyzed(&self) -> usize {
        self.next_row
    }

    /// Whether every tile row has been classified
    pub const fn is_complete(&self) -> bool {
        self.next_row >= self.grid_size[1]
    }

    /// Classify the next row of tiles
    ///
    /// Returns whether rows remain afterwards.
    pub fn analyze_row(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let row = self.next_row;
        for column in 0..self.grid_size[0] {
            let tile = [column, row];
            let code = self.classify_tile(tile);
            self.mapping.push(code, tile);
        }
        self.next_row += 1;

        !self.is_complete()
    }

    /// Selector code of a single tile, growing the palette as needed
    ///
    /// The tile is not added to the mapping.
    pub fn classify_tile(&mut self, tile: TilePosition) -> SelectorCode {
        let corners = Corner::ALL.map(|corner| {
            let character = characterize_corner(
                self.image,
                &self.layout,
                tile,
                corner,
                self.config.corner_sample_radius,
            );
            self.palette.classify(&character)
        });
        SelectorCode::from_corners(corners)
    }

    /// Classify any remaining rows and return the result
    pub fn finish(mut self) -> TemplateAnalysis {
        while self.analyze_row() {}

        TemplateAnalysis {
            mapping: self.mapping,
            palette: self.palette,
            grid_size: self.grid_size,
        }
    }
}

/// Analyze a whole tileset with the default configuration
///
/// # Errors
///
/// Returns an error if a base tile lies outside the tileset's tile grid
pub fn analyze_tileset(
    image: &TilesetImage,
    layout: TileLayout,
    base_tiles: &[TilePosition],
) -> Result<TemplateAnalysis> {
    Ok(TemplateAnalyzer::new(image, layout, base_tiles, AnalyzerConfig::default())?.finish())
}
