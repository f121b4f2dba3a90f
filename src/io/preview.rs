//! Random marker painting for preview maps

use crate::autotile::materials::MaterialId;
use crate::io::configuration::PREVIEW_MAX_RADIUS;
use crate::spatial::layer::Layer;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Paint a reproducible landscape of `materials` onto a marker layer
///
/// The first material covers the whole layer; each of the `strokes` that
/// follow picks a random material from the list, the background included, and
/// draws one random primitive with it.
/// Nothing happens for an empty layer or an empty material list.
pub fn paint_random_map(
    markers: &mut Layer<MaterialId>,
    materials: &[MaterialId],
    seed: u64,
    strokes: usize,
) {
    let Some(&background) = materials.first() else {
        return;
    };
    if markers.width() == 0 || markers.height() == 0 {
        return;
    }

    markers.fill(background);

    let mut rng = StdRng::seed_from_u64(seed);
    let width = markers.width() as f32;
    let height = markers.height() as f32;
    let point = |rng: &mut StdRng| [rng.random_range(0.0..width), rng.random_range(0.0..height)];

    for _ in 0..strokes {
        let Some(&material) = materials.get(rng.random_range(0..materials.len())) else {
            continue;
        };
        let radius = rng.random_range(1.0..=PREVIEW_MAX_RADIUS);

        match rng.random_range(0..5) {
            0 => {
                let from = point(&mut rng);
                let to = point(&mut rng);
                markers.thick_line(material, radius * 0.5, from, to);
            }
            1 => {
                let center = point(&mut rng);
                markers.circle(material, radius, center);
            }
            2 => {
                let [ax, ay] = point(&mut rng);
                let [bx, by] = point(&mut rng);
                markers.fill_rect(
                    material,
                    [ax.floor() as i32, ay.floor() as i32],
                    [bx.floor() as i32, by.floor() as i32],
                );
            }
            3 => {
                let corners = [point(&mut rng), point(&mut rng), point(&mut rng)];
                markers.thick_polygon(material, radius * 0.5, &corners);
            }
            _ => {
                let from = point(&mut rng);
                let to = point(&mut rng);
                markers.line(material, from, to);
            }
        }
    }
}
