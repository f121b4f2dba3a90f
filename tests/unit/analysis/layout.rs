//! Tests for tile grid geometry over tileset images

#[cfg(test)]
mod tests {
    use autowang::analysis::layout::{PixelRect, TileLayout, TilesetImage, image_size};
    use autowang::io::error::AutotileError;

    // Tests zero-sized tiles are rejected
    // Verified by accepting any tile size
    #[test]
    fn test_zero_tile_size_rejected() {
        let result = TileLayout::new([0, 8], [0, 0]);
        assert!(matches!(
            result,
            Err(AutotileError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
        assert!(TileLayout::new([8, 0], [0, 0]).is_err());
    }

    // Tests partial tiles and the offset are excluded from the grid
    // Verified by rounding the tile count up
    #[test]
    fn test_grid_size_with_offset() {
        let layout = TileLayout::new([8, 8], [5, 4]).unwrap();
        assert_eq!(layout.grid_size([37, 20]), [4, 2]);
        assert_eq!(layout.grid_size([4, 3]), [0, 0]);
    }

    // Tests non-square tiles divide each axis separately
    // Verified by dividing both axes by the width
    #[test]
    fn test_grid_size_rectangular() {
        let layout = TileLayout::new([16, 8], [0, 0]).unwrap();
        assert_eq!(layout.grid_size([64, 64]), [4, 8]);
        assert_eq!(layout.tile_size(), [16, 8]);
        assert_eq!(layout.offset(), [0, 0]);
    }

    // Tests pixel origin and rectangle of a tile
    // Verified by ignoring the offset
    #[test]
    fn test_pixel_rect() {
        let layout = TileLayout::new([8, 6], [5, 4]).unwrap();
        assert_eq!(layout.pixel_origin([2, 1]), [21, 10]);
        assert_eq!(
            layout.pixel_rect([2, 1]),
            PixelRect {
                x: 21,
                y: 10,
                width: 8,
                height: 6,
            }
        );
    }

    // Tests image size is reported as [width, height]
    // Verified by returning the array shape directly
    #[test]
    fn test_image_size() {
        let image = TilesetImage::from_elem((3, 7), [0; 4]);
        assert_eq!(image_size(&image), [7, 3]);
    }
}
