//! Splitting multi-material vertices into stackable tiles
//!
//! Tilesets usually carry art for common two-material transitions but not for
//! every combination that can meet at one vertex. When a combined code has no
//! tile, the materials are resolved as pairs where possible and singly
//! otherwise, and each resolution is drawn on its own depth layer.

use crate::autotile::mapping::TileMapping;
use crate::autotile::materials::MaterialId;
use crate::autotile::selector::{Autotile, SelectorCode};

/// One tile that covers part of a multi-material cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Materials this tile accounts for, ascending
    pub materials: Vec<MaterialId>,
    /// Selector code restricted to those materials
    pub code: SelectorCode,
}

/// Resolve a cell's materials into mapped pair and single-material codes
///
/// Materials are taken from `code` (deduplicated, ascending, empty excluded).
/// Pairs are scanned in lexicographic order and the first mapped pair is
/// consumed, after which the scan resumes from the same first material. Any
/// material left over is tried on its own. Materials with no mapped pair and no
/// mapped single code are dropped. Pairs come before singles in the result, and
/// no material appears in two resolutions.
pub fn decompose(
    autotile: &Autotile<'_>,
    position: [i32; 2],
    code: SelectorCode,
    mapping: &TileMapping,
) -> Vec<Resolution> {
    let mut remaining = code.materials().to_vec();
    let mut resolutions = Vec::new();

    let mut first = 0;
    while first + 1 < remaining.len() {
        let Some(&material_a) = remaining.get(first) else {
            break;
        };

        let matched = remaining
            .iter()
            .enumerate()
            .skip(first + 1)
            .find_map(|(second, &material_b)| {
                let pair_code = autotile.selector_code(position, &[material_a, material_b]);
                (!pair_code.is_empty() && mapping.contains(pair_code))
                    .then_some((second, material_b, pair_code))
            });

        match matched {
            Some((second, material_b, pair_code)) => {
                remaining.remove(second);
                remaining.remove(first);
                resolutions.push(Resolution {
                    materials: vec![material_a, material_b],
                    code: pair_code,
                });
            }
            None => first += 1,
        }
    }

    for material in remaining {
        let single_code = autotile.selector_code(position, &[material]);
        if !single_code.is_empty() && mapping.contains(single_code) {
            resolutions.push(Resolution {
                materials: vec![material],
                code: single_code,
            });
        }
    }

    resolutions
}
