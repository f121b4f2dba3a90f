//! Compositing generated depth layers into a preview image
//!
//! Layers are drawn back to front with straight-alpha source-over blending,
//! the way a tile renderer would stack them.

use crate::analysis::layout::{TileLayout, TilesetImage};
use crate::autotile::generator::DepthLayer;
use image::{Rgba, RgbaImage};

/// Blend `src` over `dst`, both straight (non-premultiplied) RGBA
pub fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let src_alpha = f32::from(src[3]) / 255.0;
    let dst_alpha = f32::from(dst[3]) / 255.0;
    let out_alpha = dst_alpha.mul_add(1.0 - src_alpha, src_alpha);

    if out_alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |s: u8, d: u8| {
        let weighted = f32::from(s)
            .mul_add(src_alpha, f32::from(d) * dst_alpha * (1.0 - src_alpha));
        (weighted / out_alpha).round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Draw every generated cell of `layers` using tiles cut from `tileset`
///
/// The output is `map width x tile width` by `map height x tile height`
/// pixels, sized from the first layer. Cells whose tile lies outside the
/// tileset draw nothing.
pub fn compose_preview(
    tileset: &TilesetImage,
    layout: &TileLayout,
    columns: usize,
    layers: &[DepthLayer],
) -> RgbaImage {
    let [tile_width, tile_height] = layout.tile_size();
    let [map_width, map_height] = layers.first().map_or([0, 0], DepthLayer::size);
    let width = u32::try_from(map_width.saturating_mul(tile_width)).unwrap_or(0);
    let height = u32::try_from(map_height.saturating_mul(tile_height)).unwrap_or(0);
    let mut canvas = RgbaImage::new(width, height);

    for layer in layers {
        for ((row, col), cell) in layer.cells().indexed_iter() {
            let Some(tile) = cell.and_then(|c| c.tile_position(columns)) else {
                continue;
            };
            let source = layout.pixel_rect(tile);

            for py in 0..source.height {
                for px in 0..source.width {
                    let Some(&pixel) = tileset.get((source.y + py, source.x + px)) else {
                        continue;
                    };
                    let (Ok(dx), Ok(dy)) = (
                        u32::try_from(col * tile_width + px),
                        u32::try_from(row * tile_height + py),
                    ) else {
                        continue;
                    };
                    if let Some(target) = canvas.get_pixel_mut_checked(dx, dy) {
                        *target = Rgba(blend_over(target.0, pixel));
                    }
                }
            }
        }
    }

    canvas
}
