//! Runtime constants and configuration defaults

/// Default rendering scale: one pixel per logical canvas cell
///
/// At this scale the output raster matches the cropped source image
/// dimensions exactly, so the maze can be painted over the source pixels.
pub const DEFAULT_CELL_SIZE: u32 = 1;

/// Color painted for corridor pixels and boundary openings
pub const CORRIDOR_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Background color for freshly allocated canvases (wall pixels)
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
