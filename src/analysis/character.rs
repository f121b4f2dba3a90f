//! Statistical color characters of sampled tile corners
//!
//! A corner is summarised by the mean and population standard deviation of
//! each RGBA channel over a small square of pixels, rather than a single
//! pixel, so anti-aliasing and dithering along tile edges do not split one
//! material into several.

use crate::analysis::layout::{TileLayout, TilesetImage};
use crate::autotile::mapping::TilePosition;
use crate::autotile::selector::Corner;
use crate::math::probability::population_moments;

/// Mean, spread and representative pixel of a sampled color region
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCharacter {
    /// Per-channel mean in RGBA order, 0 to 255
    pub mean: [f64; 4],
    /// Per-channel population standard deviation
    pub std_dev: [f64; 4],
    /// Sampled pixel closest to the mean
    pub representative: [u8; 4],
    /// Number of pixels that contributed
    pub samples: usize,
}

impl ColorCharacter {
    /// Characterize a set of pixels
    ///
    /// An empty sample is fully transparent with zero spread.
    pub fn from_samples(samples: &[[u8; 4]]) -> Self {
        if samples.is_empty() {
            return Self {
                samples: 0,
                ..Self::solid([0, 0, 0, 0])
            };
        }

        let mut mean = [0.0; 4];
        let mut std_dev = [0.0; 4];
        for channel in 0..4 {
            let values = samples
                .iter()
                .filter_map(|pixel| pixel.get(channel))
                .map(|&value| f64::from(value));
            let (channel_mean, channel_std) = population_moments(values);
            if let (Some(m), Some(s)) = (mean.get_mut(channel), std_dev.get_mut(channel)) {
                *m = channel_mean;
                *s = channel_std;
            }
        }

        let mut character = Self {
            mean,
            std_dev,
            representative: [0, 0, 0, 0],
            samples: samples.len(),
        };

        let mut best_distance = f64::INFINITY;
        for &pixel in samples {
            let distance = character.mean_distance_squared(pixel);
            if distance < best_distance {
                best_distance = distance;
                character.representative = pixel;
            }
        }

        character
    }

    /// Character of a single flat color
    pub fn solid(color: [u8; 4]) -> Self {
        Self {
            mean: color.map(f64::from),
            std_dev: [0.0; 4],
            representative: color,
            samples: 1,
        }
    }

    /// Squared RGBA distance from the mean to `color`
    pub fn mean_distance_squared(&self, color: [u8; 4]) -> f64 {
        self.mean
            .iter()
            .zip(color)
            .map(|(&mean, value)| {
                let delta = f64::from(value) - mean;
                delta * delta
            })
            .sum()
    }
}

/// Characterize one interior corner of a tile
///
/// Samples a `radius x radius` square anchored on the corner pixel and growing
/// toward the tile interior, so the right and bottom corners read leftward and
/// upward. The square is clipped to the tile, and pixels outside the image are
/// skipped.
pub fn characterize_corner(
    image: &TilesetImage,
    layout: &TileLayout,
    tile: TilePosition,
    corner: Corner,
    radius: usize,
) -> ColorCharacter {
    let [tile_width, tile_height] = layout.tile_size();
    let [origin_x, origin_y] = layout.pixel_origin(tile);
    let span_x = radius.min(tile_width);
    let span_y = radius.min(tile_height);

    let anchor_x = if corner.is_right() {
        origin_x.saturating_add(tile_width - 1)
    } else {
        origin_x
    };
    let anchor_y = if corner.is_lower() {
        origin_y.saturating_add(tile_height - 1)
    } else {
        origin_y
    };

    let mut samples = Vec::with_capacity(span_x * span_y);
    for iy in 0..span_y {
        let y = if corner.is_lower() {
            anchor_y.checked_sub(iy)
        } else {
            anchor_y.checked_add(iy)
        };
        for ix in 0..span_x {
            let x = if corner.is_right() {
                anchor_x.checked_sub(ix)
            } else {
                anchor_x.checked_add(ix)
            };
            if let (Some(x), Some(y)) = (x, y) {
                if let Some(&pixel) = image.get((y, x)) {
                    samples.push(pixel);
                }
            }
        }
    }

    ColorCharacter::from_samples(&samples)
}
