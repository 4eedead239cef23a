//! CLI entry point for the box-counting dimension estimator

use boxdim::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> boxdim::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
