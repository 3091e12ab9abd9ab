//! Image loading, odd-dimension cropping, and PNG export

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::io::error::{MazeError, Result};

/// Load a source image and crop it to odd dimensions
///
/// Even widths and heights are reduced by one pixel so that every maze cell
/// maps to a unique pixel at an odd offset. Images smaller than one pixel per
/// axis cannot occur; a 1×1 or 2×2 image simply yields an empty maze grid.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MazeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(crop_to_odd(&img.to_rgba8()))
}

/// Crop an image to odd dimensions, anchored at the top-left corner
///
/// Already-odd dimensions are returned unchanged (as a copy).
pub fn crop_to_odd(image: &RgbaImage) -> RgbaImage {
    let width = image.width().saturating_sub(1 - image.width() % 2);
    let height = image.height().saturating_sub(1 - image.height() % 2);

    if (width, height) == image.dimensions() {
        image.clone()
    } else {
        image::imageops::crop_imm(image, 0, 0, width, height).to_image()
    }
}

/// Write a canvas to disk as PNG, creating parent directories as needed
///
/// The PNG format is used regardless of the output file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the given path
pub fn export_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_even_dimensions() {
        let image = RgbaImage::new(10, 8);
        let cropped = crop_to_odd(&image);
        assert_eq!(cropped.dimensions(), (9, 7));
    }

    #[test]
    fn test_odd_dimensions_unchanged() {
        let mut image = RgbaImage::new(5, 3);
        image.put_pixel(4, 2, image::Rgba([1, 2, 3, 4]));
        let cropped = crop_to_odd(&image);
        assert_eq!(cropped.dimensions(), (5, 3));
        assert_eq!(
            cropped.get_pixel_checked(4, 2).map(|p| p.0),
            Some([1, 2, 3, 4])
        );
    }

    #[test]
    fn test_crop_preserves_top_left_content() {
        let mut image = RgbaImage::new(4, 4);
        image.put_pixel(0, 0, image::Rgba([9, 9, 9, 255]));
        let cropped = crop_to_odd(&image);
        assert_eq!(cropped.dimensions(), (3, 3));
        assert_eq!(
            cropped.get_pixel_checked(0, 0).map(|p| p.0),
            Some([9, 9, 9, 255])
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let missing = Path::new("definitely/not/here.png");
        match load_source(missing) {
            Err(MazeError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            _ => unreachable!("Expected ImageLoad error type"),
        }
    }
}
