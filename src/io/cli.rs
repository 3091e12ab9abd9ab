//! Command-line interface for carving mazes from raster images

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::engine::MazeEngine;
use crate::algorithm::intensity::IntensityField;
use crate::io::configuration::DEFAULT_CELL_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_source};
use crate::render::artist::{paint_maze, render_maze};

#[derive(Parser)]
#[command(name = "lumamaze")]
#[command(
    author,
    version,
    about = "Carve an image-guided perfect maze from a raster image"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Source image whose intensity gradients bias the corridor layout
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination path for the rendered maze (written as PNG)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Size in pixels of each rendered maze cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates a single generation run: load, carve, render, export
pub struct MazeProcessor {
    cli: Cli,
}

impl MazeProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline for the configured input and output paths
    ///
    /// At cell size 1 the maze is painted over the cropped source image, so
    /// wall pixels keep the source content; larger cell sizes render onto a
    /// fresh background canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, image loading, or export
    /// fails. Generation itself cannot fail on a valid image.
    pub fn process(&self) -> Result<()> {
        self.validate()?;

        let source = load_source(&self.cli.input)?;
        let field = IntensityField::from_image(&source);

        self.report(&format!(
            "Carving a {}x{} maze from '{}'",
            field.grid_width(),
            field.grid_height(),
            self.cli.input.display()
        ));

        let maze = MazeEngine::new(field).generate();

        let canvas = if self.cli.cell_size == DEFAULT_CELL_SIZE {
            let mut canvas = source;
            paint_maze(&maze, DEFAULT_CELL_SIZE, &mut canvas);
            canvas
        } else {
            render_maze(&maze, self.cli.cell_size)
        };

        export_png(&canvas, &self.cli.output)?;
        self.report(&format!("Maze written to '{}'", self.cli.output.display()));

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.input.as_os_str().is_empty() {
            return Err(invalid_parameter(
                "input",
                &"",
                &"input path must not be empty",
            ));
        }
        if self.cli.output.as_os_str().is_empty() {
            return Err(invalid_parameter(
                "output",
                &"",
                &"output path must not be empty",
            ));
        }
        if self.cli.cell_size == 0 {
            return Err(invalid_parameter(
                "cell-size",
                &self.cli.cell_size,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    // Allow print for user feedback on run progress
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
