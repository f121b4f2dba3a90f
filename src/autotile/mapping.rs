//! Selector code to tile position lookup

use crate::autotile::selector::SelectorCode;
use std::collections::HashMap;

/// Tile coordinates `[x, y]` in units of whole tiles within a tileset
pub type TilePosition = [usize; 2];

/// Maps selector codes to the tileset tiles that realize them
///
/// Several positions under one code are visual variants, kept in the order
/// they were added. Built once per tileset and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMapping {
    tiles: HashMap<SelectorCode, Vec<TilePosition>>,
}

impl TileMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile variant for `code`
    pub fn push(&mut self, code: SelectorCode, position: TilePosition) {
        self.tiles.entry(code).or_default().push(position);
    }

    /// All variants for `code`, if any
    pub fn get(&self, code: SelectorCode) -> Option<&[TilePosition]> {
        self.tiles.get(&code).map(Vec::as_slice)
    }

    /// The conventional variant for `code`
    pub fn first(&self, code: SelectorCode) -> Option<TilePosition> {
        self.get(code).and_then(|positions| positions.first().copied())
    }

    /// Whether `code` has at least one tile
    pub fn contains(&self, code: SelectorCode) -> bool {
        self.tiles.get(&code).is_some_and(|positions| !positions.is_empty())
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the mapping holds no codes
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of tile positions across all codes
    pub fn tile_count(&self) -> usize {
        self.tiles.values().map(Vec::len).sum()
    }

    /// Codes in ascending order
    pub fn codes(&self) -> Vec<SelectorCode> {
        let mut codes: Vec<SelectorCode> = self.tiles.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Entries in ascending code order
    pub fn entries(&self) -> Vec<(SelectorCode, &[TilePosition])> {
        self.codes()
            .into_iter()
            .filter_map(|code| self.get(code).map(|positions| (code, positions)))
            .collect()
    }
}

impl FromIterator<(SelectorCode, TilePosition)> for TileMapping {
    fn from_iter<I: IntoIterator<Item = (SelectorCode, TilePosition)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (code, position) in iter {
            mapping.push(code, position);
        }
        mapping
    }
}
