//! Tileset decoding and PNG export

use crate::analysis::layout::TilesetImage;
use crate::io::error::{AutotileError, Result};
use image::RgbaImage;
use ndarray::Array2;
use std::path::Path;

/// Convert decoded RGBA pixels into a tileset array
pub fn tileset_from_rgba(image: &RgbaImage) -> TilesetImage {
    let (width, height) = image.dimensions();
    let mut tileset = Array2::from_elem((height as usize, width as usize), [0u8; 4]);

    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(cell) = tileset.get_mut((y as usize, x as usize)) {
            *cell = pixel.0;
        }
    }

    tileset
}

/// Convert a tileset array back into an image buffer
pub fn tileset_to_rgba(tileset: &TilesetImage) -> RgbaImage {
    let width = u32::try_from(tileset.ncols()).unwrap_or(u32::MAX);
    let height = u32::try_from(tileset.nrows()).unwrap_or(u32::MAX);

    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba(
            tileset
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or([0, 0, 0, 0]),
        )
    })
}

/// Load and decode a tileset image from disk
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_tileset<P: AsRef<Path>>(path: P) -> Result<TilesetImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| AutotileError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(tileset_from_rgba(&img.to_rgba8()))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AutotileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| AutotileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
