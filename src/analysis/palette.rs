//! Online clustering of corner characters into materials
//!
//! The palette grows while a tileset is analyzed. Each new corner is scored
//! against every known material; a good enough match reuses that material's
//! id, anything else becomes a new material. Palette indices are the material
//! ids written into selector codes and mean nothing outside the analysis that
//! produced them.

use crate::analysis::character::ColorCharacter;
use crate::autotile::materials::MaterialId;
use crate::io::configuration::MAX_MATERIALS;
use crate::math::probability::{softened_sigma, symmetric_log_overlap};

/// Symmetric Gaussian overlap of two characters, in log space
///
/// Each channel of each character is treated as a Gaussian with its own mean
/// and spread. The score is the product over channels of each Gaussian's
/// unnormalized density at the other's mean: the `1 / (sigma * sqrt(2 pi))`
/// factor is left out, so every density is relative to its own peak. Identical
/// means score 0; the score falls toward negative infinity as the clusters
/// separate.
pub fn overlap_log_score(a: &ColorCharacter, b: &ColorCharacter, sigma_floor: f64) -> f64 {
    (0..4)
        .map(|channel| {
            let (Some(&mean_a), Some(&std_a), Some(&mean_b), Some(&std_b)) = (
                a.mean.get(channel),
                a.std_dev.get(channel),
                b.mean.get(channel),
                b.std_dev.get(channel),
            ) else {
                return 0.0;
            };
            symmetric_log_overlap(
                mean_a,
                softened_sigma(std_a, sigma_floor),
                mean_b,
                softened_sigma(std_b, sigma_floor),
            )
        })
        .sum()
}

/// Ordered list of discovered materials
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<ColorCharacter>,
    sigma_floor: f64,
    log_match_floor: f64,
}

impl Palette {
    /// Create an empty palette
    ///
    /// `match_floor` is the minimum overlap, in `(0, 1]`, for a corner to join
    /// an existing material.
    pub fn new(sigma_floor: f64, match_floor: f64) -> Self {
        Self {
            entries: Vec::new(),
            sigma_floor,
            log_match_floor: match_floor.ln(),
        }
    }

    /// Discovered materials, indexed by material id
    pub const fn entries(&self) -> &[ColorCharacter] {
        self.entries.as_slice()
    }

    /// Character of material `id`
    pub fn get(&self, id: MaterialId) -> Option<&ColorCharacter> {
        self.entries.get(usize::from(id))
    }

    /// Number of materials
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no material has been discovered yet
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every material id is taken
    pub const fn is_full(&self) -> bool {
        self.entries.len() >= MAX_MATERIALS
    }

    /// Append a material unconditionally
    ///
    /// Used for base tiles, which fix the first ids before any inference.
    /// Returns `None` once every id is taken.
    pub fn seed(&mut self, character: ColorCharacter) -> Option<MaterialId> {
        let id = MaterialId::try_from(self.entries.len()).ok()?;
        self.entries.push(character);
        Some(id)
    }

    /// Highest-scoring material for `character` and its log score
    ///
    /// Ties go to the lower id.
    pub fn best_match(&self, character: &ColorCharacter) -> Option<(MaterialId, f64)> {
        let mut best: Option<(MaterialId, f64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let Ok(id) = MaterialId::try_from(index) else {
                break;
            };
            let score = overlap_log_score(entry, character, self.sigma_floor);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((id, score));
            }
        }
        best
    }

    /// Material id for `character`, discovering a new material if nothing fits
    ///
    /// When the palette is full the best match is used regardless of score.
    pub fn classify(&mut self, character: &ColorCharacter) -> MaterialId {
        match self.best_match(character) {
            Some((id, score)) if score >= self.log_match_floor || self.is_full() => id,
            _ => self
                .seed(character.clone())
                .unwrap_or(MaterialId::MAX),
        }
    }
}
