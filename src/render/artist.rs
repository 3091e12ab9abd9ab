//! Corridor and opening painting onto pixel canvases
//!
//! The canvas is addressed in logical cells of `cell_size` pixels each. A
//! grid cell at `(x, y)` owns the canvas cell at `(2x + 1, 2y + 1)`; the wall
//! opening toward its parent sits one step in the reversed stored direction,
//! from the same offset table the carving phase uses.

use image::{Rgba, RgbaImage};

use crate::io::configuration::{BACKGROUND_COLOR, CORRIDOR_COLOR};
use crate::spatial::cell::Cell;
use crate::spatial::grid::{CellState, MazeGrid, ParentLink};

/// Render the maze onto a fresh opaque background canvas
///
/// The canvas measures `(2·width + 1) × (2·height + 1)` logical cells scaled
/// by `cell_size`.
pub fn render_maze(maze: &MazeGrid, cell_size: u32) -> RgbaImage {
    let width = (maze.width() as u32 * 2 + 1) * cell_size;
    let height = (maze.height() as u32 * 2 + 1) * cell_size;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));
    paint_maze(maze, cell_size, &mut canvas);
    canvas
}

/// Paint corridors and boundary openings onto an existing canvas
///
/// The entrance at canvas cell (1, 0) and the exit at
/// `(2·width − 1, 2·height)` are painted first, then one corridor cell plus
/// one wall opening per grid cell. Painting halts early at the first
/// unvisited cell: that only occurs on a grid whose generation did not
/// complete, and leaves a partial canvas.
pub fn paint_maze(maze: &MazeGrid, cell_size: u32, canvas: &mut RgbaImage) {
    let width = maze.width() as i64;
    let height = maze.height() as i64;

    if width > 0 && height > 0 {
        fill_canvas_cell(canvas, 1, 0, cell_size);
        fill_canvas_cell(canvas, width * 2 - 1, height * 2, cell_size);
    }

    for x in 0..width {
        for y in 0..height {
            let link = match maze.state(Cell::new(x as i32, y as i32)) {
                CellState::Unvisited => return,
                CellState::Visited(link) => link,
            };

            let cx = x * 2 + 1;
            let cy = y * 2 + 1;
            fill_canvas_cell(canvas, cx, cy, cell_size);

            if let ParentLink::Entered(direction) = link {
                // The opening toward the parent lies one step against the
                // direction of entry
                let (dx, dy) = direction.reversed().step();
                fill_canvas_cell(canvas, cx + i64::from(dx), cy + i64::from(dy), cell_size);
            }
        }
    }
}

// Fill one cell-size square of corridor color; out-of-canvas pixels are skipped
fn fill_canvas_cell(canvas: &mut RgbaImage, cell_x: i64, cell_y: i64, cell_size: u32) {
    if cell_x < 0 || cell_y < 0 {
        return;
    }
    let base_x = cell_x as u32 * cell_size;
    let base_y = cell_y as u32 * cell_size;

    for dy in 0..cell_size {
        for dx in 0..cell_size {
            if let Some(pixel) = canvas.get_pixel_mut_checked(base_x + dx, base_y + dy) {
                *pixel = Rgba(CORRIDOR_COLOR);
            }
        }
    }
}
