//! Tests for layer storage, permissive bounds and rectangle fills

#[cfg(test)]
mod tests {
    use autowang::spatial::layer::{Layer, LayerGeometry};
    use ndarray::Array2;

    fn layer(width: usize, height: usize) -> Layer<u8> {
        Layer::new(LayerGeometry::Square, [width, height], 0)
    }

    // Tests size ordering is [width, height]
    // Verified by swapping array dimensions
    #[test]
    fn test_new_layer_dimensions() {
        let layer = layer(5, 3);
        assert_eq!(layer.size(), [5, 3]);
        assert_eq!(layer.width(), 5);
        assert_eq!(layer.height(), 3);
        assert_eq!(layer.cells().dim(), (3, 5));
        assert_eq!(layer.geometry(), LayerGeometry::Square);
    }

    // Tests reads and writes round-trip inside bounds
    // Verified by transposing the index conversion
    #[test]
    fn test_set_then_get() {
        let mut layer = layer(4, 2);
        layer.set(3, 1, 7);
        assert_eq!(layer.get(3, 1), 7);
        assert_eq!(layer.at([3, 1]), 7);
        assert_eq!(layer.get(1, 3), 0);
    }

    // Tests out-of-range reads return the default cell
    // Verified by returning zero instead of the default
    #[test]
    fn test_out_of_bounds_reads_default() {
        let layer = Layer::new(LayerGeometry::DualSquare, [2, 2], 9u8);
        assert_eq!(layer.get(-1, 0), 9);
        assert_eq!(layer.get(0, 2), 9);
        assert_eq!(layer.get(i32::MAX, i32::MIN), 9);
        assert!(!layer.contains(2, 0));
        assert!(layer.contains(1, 1));
    }

    // Tests out-of-range writes change nothing
    // Verified by clamping writes to the border
    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut layer = layer(2, 2);
        let before = layer.clone();
        layer.set(-1, 0, 5);
        layer.set(2, 1, 5);
        layer.set_at([0, -3], 5);
        assert_eq!(layer, before);
    }

    // Tests fill overwrites every cell
    // Verified by filling only the first row
    #[test]
    fn test_fill() {
        let mut layer = layer(3, 3);
        layer.set(1, 1, 4);
        layer.fill(2);
        assert!(layer.cells().iter().all(|&cell| cell == 2));
    }

    // Tests rectangle corners in any order are inclusive
    // Verified by using exclusive upper bounds
    #[test]
    fn test_fill_rect_inclusive_any_order() {
        let mut layer = layer(5, 5);
        layer.fill_rect(1, [3, 3], [1, 2]);

        let painted: usize = layer.cells().iter().filter(|&&cell| cell == 1).count();
        assert_eq!(painted, 3 * 2);
        assert_eq!(layer.get(1, 2), 1);
        assert_eq!(layer.get(3, 3), 1);
        assert_eq!(layer.get(0, 2), 0);
        assert_eq!(layer.get(3, 4), 0);
    }

    // Tests rectangles hanging over the border are clipped
    // Verified by skipping rectangles that are partially outside
    #[test]
    fn test_fill_rect_clipped() {
        let mut layer = layer(4, 4);
        layer.fill_rect(3, [-10, -10], [1, 0]);
        assert_eq!(layer.get(0, 0), 3);
        assert_eq!(layer.get(1, 0), 3);
        assert_eq!(layer.get(2, 0), 0);
        assert_eq!(layer.get(0, 1), 0);
    }

    // Tests rectangles fully outside do nothing
    // Verified by removing the empty span check
    #[test]
    fn test_fill_rect_outside() {
        let mut layer = layer(4, 4);
        layer.fill_rect(3, [5, 5], [9, 9]);
        layer.fill_rect(3, [-4, 0], [-1, 3]);
        assert!(layer.cells().iter().all(|&cell| cell == 0));
    }

    // Tests filling the same rectangle twice is idempotent
    // Verified by accumulating instead of assigning
    #[test]
    fn test_fill_rect_idempotent() {
        let mut once = layer(6, 6);
        once.fill_rect(2, [1, 1], [4, 3]);
        let mut twice = once.clone();
        twice.fill_rect(2, [1, 1], [4, 3]);
        assert_eq!(once, twice);
    }

    // Tests a rectangle covering the whole layer matches a plain fill
    // Verified by stopping the column walk one cell early
    #[test]
    fn test_fill_rect_whole_layer() {
        let mut rect = layer(5, 3);
        rect.fill_rect(4, [-1, -1], [9, 9]);
        let mut filled = layer(5, 3);
        filled.fill(4);
        assert_eq!(rect, filled);
    }

    // Tests candidate filtering with wildcard and explicit lists
    // Verified by ignoring the candidate list
    #[test]
    fn test_any_of() {
        let mut layer = layer(2, 2);
        layer.set(0, 0, 3);
        assert_eq!(layer.any_of([0, 0], &[]), 3);
        assert_eq!(layer.any_of([0, 0], &[1, 3]), 3);
        assert_eq!(layer.any_of([0, 0], &[1, 2]), 0);
        assert_eq!(layer.any_of([5, 5], &[]), 0);
    }

    // Tests wrapping an existing array keeps its shape
    // Verified by reallocating with the default cell
    #[test]
    fn test_from_cells() {
        let cells = Array2::from_shape_fn((2, 3), |(row, col)| (row * 3 + col) as u8);
        let layer = Layer::from_cells(LayerGeometry::HexAcross, cells, 0);
        assert_eq!(layer.size(), [3, 2]);
        assert_eq!(layer.get(2, 1), 5);
        assert_eq!(layer.default_cell(), 0);
        assert_eq!(layer.geometry(), LayerGeometry::HexAcross);
    }
}
