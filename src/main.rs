//! CLI entry point for the glyphpage raster toolkit

use clap::Parser;
use glyphpage::io::cli::Cli;

fn main() -> glyphpage::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
