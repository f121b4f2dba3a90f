//! Dual-corner Wang selector codes
//!
//! A tile is chosen by the materials sitting on its four corners. The corners
//! of cell `(x, y)` are the marker vertices `(x, y)`, `(x + 1, y)`,
//! `(x, y + 1)` and `(x + 1, y + 1)`. Their ids are packed into one `u32`:
//!
//! ```text
//! bits 24..32  upper-left   vertex (x,     y)
//! bits 16..24  upper-right  vertex (x + 1, y)
//! bits  8..16  lower-left   vertex (x,     y + 1)
//! bits  0..8   lower-right  vertex (x + 1, y + 1)
//! ```
//!
//! The template analyzer encodes tiles with [`SelectorCode::from_corners`] and
//! the selector decodes marker layers with the same function, so the two sides
//! cannot drift apart.

use crate::autotile::materials::{EMPTY_MATERIAL, MaterialId, MaterialSet};
use crate::spatial::layer::Layer;
use std::fmt;

/// One corner of a tile or of a 2x2 vertex neighbourhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top left
    UpperLeft,
    /// Top right
    UpperRight,
    /// Bottom left
    LowerLeft,
    /// Bottom right
    LowerRight,
}

impl Corner {
    /// All corners in packing order
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// Bit offset of this corner's field in a selector code
    pub const fn shift(self) -> u32 {
        match self {
            Self::UpperLeft => 24,
            Self::UpperRight => 16,
            Self::LowerLeft => 8,
            Self::LowerRight => 0,
        }
    }

    /// Vertex offset of this corner relative to the cell position
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::UpperLeft => [0, 0],
            Self::UpperRight => [1, 0],
            Self::LowerLeft => [0, 1],
            Self::LowerRight => [1, 1],
        }
    }

    /// Whether the corner lies on the right edge of its tile
    pub const fn is_right(self) -> bool {
        matches!(self, Self::UpperRight | Self::LowerRight)
    }

    /// Whether the corner lies on the bottom edge of its tile
    pub const fn is_lower(self) -> bool {
        matches!(self, Self::LowerLeft | Self::LowerRight)
    }
}

/// Packed corner materials of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SelectorCode(pub u32);

impl SelectorCode {
    /// Code with no material on any corner
    pub const EMPTY: Self = Self(0);

    /// Pack corner materials given in [`Corner::ALL`] order
    pub const fn from_corners(corners: [MaterialId; 4]) -> Self {
        let [upper_left, upper_right, lower_left, lower_right] = corners;
        Self(
            ((upper_left as u32) << Corner::UpperLeft.shift())
                | ((upper_right as u32) << Corner::UpperRight.shift())
                | ((lower_left as u32) << Corner::LowerLeft.shift())
                | ((lower_right as u32) << Corner::LowerRight.shift()),
        )
    }

    /// Material on a single corner
    pub const fn corner(self, corner: Corner) -> MaterialId {
        ((self.0 >> corner.shift()) & 0xFF) as MaterialId
    }

    /// All corner materials in [`Corner::ALL`] order
    pub const fn corners(self) -> [MaterialId; 4] {
        [
            self.corner(Corner::UpperLeft),
            self.corner(Corner::UpperRight),
            self.corner(Corner::LowerLeft),
            self.corner(Corner::LowerRight),
        ]
    }

    /// Whether the code selects no tile
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Distinct non-empty materials present on the corners
    pub fn materials(self) -> MaterialSet {
        self.corners()
            .into_iter()
            .filter(|&material| material != EMPTY_MATERIAL)
            .collect()
    }
}

impl From<u32> for SelectorCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SelectorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Computes selector codes from a marker layer
///
/// Out-of-range vertices read as the layer's default cell, so cells along the
/// last row and column of an undersized marker layer still produce codes.
#[derive(Debug, Clone, Copy)]
pub struct Autotile<'a> {
    layer: &'a Layer<MaterialId>,
}

impl<'a> Autotile<'a> {
    /// Borrow a marker layer for code computation
    pub const fn new(layer: &'a Layer<MaterialId>) -> Self {
        Self { layer }
    }

    /// The marker layer codes are read from
    pub const fn layer(&self) -> &'a Layer<MaterialId> {
        self.layer
    }

    /// Selector code for the cell whose upper-left vertex is `position`
    ///
    /// Only vertices holding one of `materials` contribute; the rest read as
    /// the layer default. An empty `materials` slice accepts every material.
    pub fn selector_code(&self, position: [i32; 2], materials: &[MaterialId]) -> SelectorCode {
        SelectorCode::from_corners(Corner::ALL.map(|corner| {
            let offset = corner.offset();
            self.layer.any_of(
                [
                    position[0].saturating_add(offset[0]),
                    position[1].saturating_add(offset[1]),
                ],
                materials,
            )
        }))
    }
}
