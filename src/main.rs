//! CLI entry point for tileset analysis and autotiled map previews

use autowang::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> autowang::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
