use bitvec::prelude::*;
use std::fmt;

/// Identifier of a painted material; 0 is reserved for "no material"
pub type MaterialId = u8;

/// Material id that never produces a tile
pub const EMPTY_MATERIAL: MaterialId = 0;

/// Fixed-size set of material ids
///
/// Backed by a 256-bit array so every `u8` id has a slot. Iteration is always
/// in ascending id order, which the decomposition relies on for its
/// tie-breaking.
#[derive(Clone, PartialEq, Eq)]
pub struct MaterialSet {
    bits: BitArr!(for 256, in u64, Lsb0),
}

impl Default for MaterialSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Add a material
    pub fn insert(&mut self, material: MaterialId) {
        self.bits.set(usize::from(material), true);
    }

    /// Remove a material
    pub fn remove(&mut self, material: MaterialId) {
        self.bits.set(usize::from(material), false);
    }

    /// Test membership
    pub fn contains(&self, material: MaterialId) -> bool {
        self.bits.get(usize::from(material)).as_deref() == Some(&true)
    }

    /// Number of materials in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Check if the set holds no materials
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|index| MaterialId::try_from(index).ok())
    }

    /// Collect members in ascending order
    pub fn to_vec(&self) -> Vec<MaterialId> {
        self.iter().collect()
    }
}

impl FromIterator<MaterialId> for MaterialSet {
    fn from_iter<I: IntoIterator<Item = MaterialId>>(iter: I) -> Self {
        let mut set = Self::new();
        for material in iter {
            set.insert(material);
        }
        set
    }
}

impl fmt::Debug for MaterialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
