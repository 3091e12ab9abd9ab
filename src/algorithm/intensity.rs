//! Packed pixel intensities sampled from the source image
//!
//! Grid cells map to a unique pixel at an odd offset, with corridor pixels at
//! even offsets between them. Even image dimensions are cropped by one pixel
//! so this mapping holds exactly.

use image::RgbaImage;
use ndarray::Array2;

use crate::spatial::cell::Cell;

/// Read-only view of source image intensities, sized for maze generation
///
/// Stores one packed value per pixel of the (possibly cropped) source image
/// and derives the maze grid dimensions from it. Intensity is the raw packed
/// ARGB value of the pixel at a cell's center, `(2x + 1, 2y + 1)`.
#[derive(Debug, Clone)]
pub struct IntensityField {
    values: Array2<i64>,
    grid_dimensions: (usize, usize),
}

/// Pack an RGBA sample into a single signed value
///
/// Alpha occupies the high byte, matching packed-integer pixel accessors
/// (`0xAARRGGBB`, sign-extended from 32 bits). Opaque pixels are therefore
/// negative; only differences between values are ever consumed.
pub const fn pack_rgba(rgba: [u8; 4]) -> i64 {
    let [r, g, b, a] = rgba;
    i32::from_be_bytes([a, r, g, b]) as i64
}

impl IntensityField {
    /// Sample every pixel of the source image into a packed intensity table
    ///
    /// Even image dimensions are reduced by one; pixels outside the adjusted
    /// region are ignored.
    pub fn from_image(image: &RgbaImage) -> Self {
        let width = crop_to_odd(image.width() as usize);
        let height = crop_to_odd(image.height() as usize);

        let mut values = Array2::zeros((height, width));
        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(value) = values.get_mut((y as usize, x as usize)) {
                *value = pack_rgba(pixel.0);
            }
        }

        Self::from_values(values)
    }

    /// Build a field from a precomputed intensity table
    ///
    /// Used for synthetic tables in tests and benchmarks. Even table
    /// dimensions are reduced by one, mirroring `from_image`.
    pub fn from_values(values: Array2<i64>) -> Self {
        let (rows, cols) = values.dim();
        let width = crop_to_odd(cols);
        let height = crop_to_odd(rows);
        let grid_dimensions = (width.saturating_sub(1) / 2, height.saturating_sub(1) / 2);

        Self {
            values,
            grid_dimensions,
        }
    }

    /// Width of the maze grid derived from the image
    pub const fn grid_width(&self) -> usize {
        self.grid_dimensions.0
    }

    /// Height of the maze grid derived from the image
    pub const fn grid_height(&self) -> usize {
        self.grid_dimensions.1
    }

    /// Intensity at the pixel corresponding to the given cell's center
    ///
    /// Out-of-range cells sample as zero; generation only ever samples cells
    /// within the derived grid.
    pub fn sample(&self, cell: Cell) -> i64 {
        let row = cell.y as usize * 2 + 1;
        let col = cell.x as usize * 2 + 1;
        self.values.get((row, col)).copied().unwrap_or(0)
    }
}

// Largest odd value not exceeding the input (zero stays zero)
const fn crop_to_odd(extent: usize) -> usize {
    if extent % 2 == 0 {
        extent.saturating_sub(1)
    } else {
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgba_layout() {
        assert_eq!(pack_rgba([0, 0, 0, 0]), 0);
        assert_eq!(pack_rgba([0, 0, 1, 0]), 1);
        assert_eq!(pack_rgba([1, 0, 0, 0]), 0x0001_0000);
        // Opaque alpha sets the sign bit of the 32-bit packed value
        assert_eq!(pack_rgba([0, 0, 0, 255]), i64::from(0xFF00_0000_u32 as i32));
    }

    #[test]
    fn test_even_dimensions_are_cropped() {
        let field = IntensityField::from_values(Array2::zeros((10, 10)));
        assert_eq!(field.grid_width(), 4);
        assert_eq!(field.grid_height(), 4);
    }

    #[test]
    fn test_odd_dimensions_are_kept() {
        let field = IntensityField::from_values(Array2::zeros((9, 7)));
        assert_eq!(field.grid_width(), 3);
        assert_eq!(field.grid_height(), 4);
    }

    #[test]
    fn test_degenerate_image_yields_empty_grid() {
        let field = IntensityField::from_values(Array2::zeros((2, 2)));
        assert_eq!(field.grid_width(), 0);
        assert_eq!(field.grid_height(), 0);
    }

    #[test]
    fn test_sample_reads_cell_center() {
        let mut values = Array2::zeros((5, 5));
        if let Some(value) = values.get_mut((3, 1)) {
            *value = 42;
        }
        let field = IntensityField::from_values(values);
        // Cell (0, 1) maps to pixel (1, 3)
        assert_eq!(field.sample(Cell::new(0, 1)), 42);
        assert_eq!(field.sample(Cell::new(1, 0)), 0);
    }

    #[test]
    fn test_from_image_matches_packing() {
        let mut image = RgbaImage::new(5, 5);
        image.put_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
        let field = IntensityField::from_image(&image);
        assert_eq!(field.sample(Cell::new(0, 0)), pack_rgba([10, 20, 30, 255]));
    }
}
