//! Tileset geometry: where each tile sits inside the source image

use crate::autotile::mapping::TilePosition;
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

/// Decoded tileset pixels, shape `(height, width)`, straight RGBA8
pub type TilesetImage = Array2<[u8; 4]>;

/// Image size as `[width, height]`
pub fn image_size(image: &TilesetImage) -> [usize; 2] {
    [image.ncols(), image.nrows()]
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

/// Uniform tile grid laid over a tileset image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    tile_size: [usize; 2],
    offset: [usize; 2],
}

impl TileLayout {
    /// Describe a grid of `tile_size` tiles starting `offset` pixels into the image
    ///
    /// # Errors
    ///
    /// Returns an error if either tile dimension is zero
    pub fn new(tile_size: [usize; 2], offset: [usize; 2]) -> Result<Self> {
        if tile_size.contains(&0) {
            return Err(invalid_parameter(
                "tile_size",
                &format!("{}x{}", tile_size[0], tile_size[1]),
                &"tile dimensions must be positive",
            ));
        }
        Ok(Self { tile_size, offset })
    }

    /// Tile size in pixels as `[width, height]`
    pub const fn tile_size(&self) -> [usize; 2] {
        self.tile_size
    }

    /// Pixel offset of the first tile
    pub const fn offset(&self) -> [usize; 2] {
        self.offset
    }

    /// Number of whole tiles that fit, as `[columns, rows]`
    ///
    /// Partial tiles at the right and bottom edges are not counted.
    pub fn grid_size(&self, image_size: [usize; 2]) -> [usize; 2] {
        let [width, height] = image_size;
        let [offset_x, offset_y] = self.offset;
        let [tile_width, tile_height] = self.tile_size;
        [
            width
                .saturating_sub(offset_x)
                .checked_div(tile_width)
                .unwrap_or(0),
            height
                .saturating_sub(offset_y)
                .checked_div(tile_height)
                .unwrap_or(0),
        ]
    }

    /// Pixel coordinates of a tile's upper-left corner
    pub fn pixel_origin(&self, tile: TilePosition) -> [usize; 2] {
        let [offset_x, offset_y] = self.offset;
        let [tile_width, tile_height] = self.tile_size;
        [
            offset_x.saturating_add(tile[0].saturating_mul(tile_width)),
            offset_y.saturating_add(tile[1].saturating_mul(tile_height)),
        ]
    }

    /// Source rectangle of a tile, as a renderer would use for texture lookup
    pub fn pixel_rect(&self, tile: TilePosition) -> PixelRect {
        let [x, y] = self.pixel_origin(tile);
        PixelRect {
            x,
            y,
            width: self.tile_size[0],
            height: self.tile_size[1],
        }
    }
}
