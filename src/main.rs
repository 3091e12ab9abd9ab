//! CLI entry point for the image-guided maze generator

use clap::Parser;
use lumamaze::io::cli::{Cli, MazeProcessor};

fn main() -> lumamaze::Result<()> {
    let cli = Cli::parse();
    let processor = MazeProcessor::new(cli);
    processor.process()
}
