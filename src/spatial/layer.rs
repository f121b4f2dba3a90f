//! Dense 2D layers of typed cells with permissive bounds handling
//!
//! A layer never faults on out-of-range coordinates: reads return the layer's
//! default cell and writes are dropped. Rasterization code can therefore paint
//! shapes that hang over the border without clipping them first.

use ndarray::Array2;

/// Cell arrangement a layer was authored for
///
/// Carried as a tag only. Rasterization treats every layer as square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerGeometry {
    /// Axis-aligned square cells
    #[default]
    Square,
    /// Square cells addressed on the dual (vertex) grid
    DualSquare,
    /// Hexagons with flat tops, rows running across
    HexAcross,
    /// Hexagons with pointed tops, columns running down
    HexDown,
    /// Alternating up and down triangles
    Triangle,
}

/// Fixed-size grid of cells stored row-major
///
/// Positions are `[x, y]` with `x` growing right and `y` growing down. The
/// backing array has shape `(height, width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<T> {
    geometry: LayerGeometry,
    cells: Array2<T>,
    default_cell: T,
}

impl<T: Copy> Layer<T> {
    /// Allocate a `[width, height]` layer filled with `default_cell`
    pub fn new(geometry: LayerGeometry, size: [usize; 2], default_cell: T) -> Self {
        Self {
            geometry,
            cells: Array2::from_elem((size[1], size[0]), default_cell),
            default_cell,
        }
    }

    /// Wrap an existing `(height, width)` array
    pub const fn from_cells(geometry: LayerGeometry, cells: Array2<T>, default_cell: T) -> Self {
        Self {
            geometry,
            cells,
            default_cell,
        }
    }

    /// Geometry tag the layer was created with
    pub const fn geometry(&self) -> LayerGeometry {
        self.geometry
    }

    /// Value returned for out-of-bounds reads
    pub const fn default_cell(&self) -> T {
        self.default_cell
    }

    /// Layer size as `[width, height]`
    pub fn size(&self) -> [usize; 2] {
        let (rows, cols) = self.cells.dim();
        [cols, rows]
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Backing array of shape `(height, width)`
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Check whether `(x, y)` addresses a cell of this layer
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    // Converts signed coordinates to an array index, rejecting anything outside
    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some((row, col))
    }

    /// Read the cell at `(x, y)`, or the default cell when out of range
    pub fn get(&self, x: i32, y: i32) -> T {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(self.default_cell)
    }

    /// Read the cell at `[x, y]`, or the default cell when out of range
    pub fn at(&self, position: [i32; 2]) -> T {
        self.get(position[0], position[1])
    }

    /// Write the cell at `(x, y)`; out-of-range writes are ignored
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(index) = self.index(x, y) {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = value;
            }
        }
    }

    /// Write the cell at `[x, y]`; out-of-range writes are ignored
    pub fn set_at(&mut self, position: [i32; 2], value: T) {
        self.set(position[0], position[1], value);
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Fill the inclusive rectangle spanned by two corners, clipped to the layer
    ///
    /// The corners may be given in any order.
    pub fn fill_rect(&mut self, value: T, corner_a: [i32; 2], corner_b: [i32; 2]) {
        let Some((x0, x1)) = clip_span(corner_a[0], corner_b[0], self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(corner_a[1], corner_b[1], self.height()) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                if let Some(cell) = self.cells.get_mut((y, x)) {
                    *cell = value;
                }
            }
        }
    }
}

impl<T: Copy + PartialEq> Layer<T> {
    /// Read a cell only if it belongs to `candidates`
    ///
    /// Returns the cell value when `position` is in range and either
    /// `candidates` is empty (wildcard) or contains the value. Everything else
    /// reads as the default cell.
    pub fn any_of(&self, position: [i32; 2], candidates: &[T]) -> T {
        match self.index(position[0], position[1]) {
            Some(index) => self
                .cells
                .get(index)
                .copied()
                .filter(|value| candidates.is_empty() || candidates.contains(value))
                .unwrap_or(self.default_cell),
            None => self.default_cell,
        }
    }
}

// Inclusive span between two coordinates clipped to `[0, limit)`
fn clip_span(a: i32, b: i32, limit: usize) -> Option<(usize, usize)> {
    let upper = i64::try_from(limit).ok()? - 1;
    let low = i64::from(a.min(b)).max(0);
    let high = i64::from(a.max(b)).min(upper);
    if low > high {
        return None;
    }
    Some((usize::try_from(low).ok()?, usize::try_from(high).ok()?))
}
