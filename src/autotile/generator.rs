//! Turning painted marker layers into depth-ordered tile cells
//!
//! A map of `W x H` cells is driven by a marker layer of `(W + 1) x (H + 1)`
//! vertices. Every cell looks up the code of its four corner vertices; a hit
//! lands on depth layer 0, a miss is decomposed and spread across successive
//! depth layers so a renderer drawing them back to front blends the partial
//! tiles together.

use crate::autotile::decompose::decompose;
use crate::autotile::mapping::{TileMapping, TilePosition};
use crate::autotile::materials::{EMPTY_MATERIAL, MaterialId};
use crate::autotile::selector::{Autotile, SelectorCode};
use crate::spatial::layer::{Layer, LayerGeometry};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Foreground word of a freshly generated cell (opaque white, 4-4-4-4)
pub const DEFAULT_FOREGROUND: u16 = 0xFFFF;
/// Background word of a freshly generated cell (transparent, 4-4-4-4)
pub const DEFAULT_BACKGROUND: u16 = 0x0000;

/// Render descriptor for one cell of one depth layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputCell {
    /// Tile index within the tileset, `x + y * columns`
    pub tile: u16,
    /// Foreground tint, 4 bits per RGBA channel
    pub fg: u16,
    /// Background color, 4 bits per RGBA channel
    pub bg: u16,
    /// Renderer-defined flags
    pub flags: u8,
    /// Stencil reference value
    pub stencil: u8,
}

impl OutputCell {
    /// Untinted cell showing `tile`
    pub const fn from_tile(tile: u16) -> Self {
        Self {
            tile,
            fg: DEFAULT_FOREGROUND,
            bg: DEFAULT_BACKGROUND,
            flags: 0,
            stencil: 0,
        }
    }

    /// Tile position of this cell within a tileset of `columns` tiles per row
    pub fn tile_position(&self, columns: usize) -> Option<TilePosition> {
        tile_position(usize::from(self.tile), columns)
    }
}

/// Linear tile index of `position` in a tileset `columns` tiles wide
pub const fn tile_index(position: TilePosition, columns: usize) -> usize {
    position[0].saturating_add(position[1].saturating_mul(columns))
}

/// Inverse of [`tile_index`]; `None` for a zero-width tileset
pub const fn tile_position(index: usize, columns: usize) -> Option<TilePosition> {
    if columns == 0 {
        None
    } else {
        Some([index % columns, index / columns])
    }
}

/// One depth slice of generated output
pub type DepthLayer = Layer<Option<OutputCell>>;

/// How a tile is picked when a code has several variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantPolicy {
    /// Always take the first variant
    #[default]
    First,
    /// Pick variants from a random stream seeded at every generation
    Seeded(u64),
}

/// Counters describing one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Cells with no material on any corner
    pub empty: usize,
    /// Cells resolved by a direct lookup
    pub direct: usize,
    /// Cells resolved through decomposition into one or more layers
    pub decomposed: usize,
    /// Cells with materials that produced no tile at all
    pub unresolved: usize,
    /// Resolutions discarded because every depth layer was already used
    pub overflow: usize,
}

/// Marker layer plus the depth layers generated from it
#[derive(Debug, Clone)]
pub struct Tilemap {
    size: [usize; 2],
    markers: Layer<MaterialId>,
    depth_layers: Vec<DepthLayer>,
    variants: VariantPolicy,
}

impl Tilemap {
    /// Create a `[width, height]` map with `depth` output layers
    pub fn new(size: [usize; 2], depth: usize) -> Self {
        let vertex_size = [size[0].saturating_add(1), size[1].saturating_add(1)];
        Self {
            size,
            markers: Layer::new(LayerGeometry::Square, vertex_size, EMPTY_MATERIAL),
            depth_layers: (0..depth)
                .map(|_| Layer::new(LayerGeometry::Square, size, None))
                .collect(),
            variants: VariantPolicy::First,
        }
    }

    /// Use a different variant policy
    #[must_use]
    pub fn with_variants(mut self, variants: VariantPolicy) -> Self {
        self.variants = variants;
        self
    }

    /// Map size in cells as `[width, height]`
    pub const fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Vertex marker layer, one larger than the map in each dimension
    pub const fn markers(&self) -> &Layer<MaterialId> {
        &self.markers
    }

    /// Mutable marker layer for painting
    pub const fn markers_mut(&mut self) -> &mut Layer<MaterialId> {
        &mut self.markers
    }

    /// Generated depth layers, back to front
    pub fn depth_layers(&self) -> &[DepthLayer] {
        &self.depth_layers
    }

    /// Regenerate every depth layer from the current markers
    ///
    /// `columns` is the tileset width in tiles, used to turn tile positions
    /// into cell indices.
    pub fn generate(&mut self, mapping: &TileMapping, columns: usize) -> GenerationStats {
        for layer in &mut self.depth_layers {
            layer.fill(None);
        }

        let mut rng = match self.variants {
            VariantPolicy::First => None,
            VariantPolicy::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        let mut stats = GenerationStats::default();
        let autotile = Autotile::new(&self.markers);
        let depth = self.depth_layers.len();

        for y in 0..self.size[1] {
            for x in 0..self.size[0] {
                let (Ok(cx), Ok(cy)) = (i32::try_from(x), i32::try_from(y)) else {
                    continue;
                };
                let position = [cx, cy];
                let code = autotile.selector_code(position, &[]);
                if code.is_empty() {
                    stats.empty += 1;
                    continue;
                }

                let direct = mapping.contains(code);
                let codes: Vec<SelectorCode> = if direct {
                    vec![code]
                } else {
                    decompose(&autotile, position, code, mapping)
                        .into_iter()
                        .map(|resolution| resolution.code)
                        .collect()
                };

                let cells: Vec<Option<OutputCell>> = codes
                    .iter()
                    .take(depth)
                    .map(|&layer_code| {
                        pick_variant(mapping, layer_code, rng.as_mut())
                            .and_then(|tile| u16::try_from(tile_index(tile, columns)).ok())
                            .map(OutputCell::from_tile)
                    })
                    .collect();

                // Tiles whose index does not fit a cell resolve to nothing
                if codes.is_empty() || (depth > 0 && cells.iter().all(Option::is_none)) {
                    stats.unresolved += 1;
                    continue;
                }
                if direct {
                    stats.direct += 1;
                } else {
                    stats.decomposed += 1;
                }
                stats.overflow += codes.len().saturating_sub(depth);

                for (layer, cell) in self.depth_layers.iter_mut().zip(cells) {
                    layer.set(cx, cy, cell);
                }
            }
        }

        stats
    }
}

fn pick_variant(
    mapping: &TileMapping,
    code: SelectorCode,
    rng: Option<&mut StdRng>,
) -> Option<TilePosition> {
    let variants = mapping.get(code)?;
    match rng {
        Some(rng) if variants.len() > 1 => {
            variants.get(rng.random_range(0..variants.len())).copied()
        }
        _ => variants.first().copied(),
    }
}
