pub mod completions;
pub mod generate;
pub mod palette;

use clap::{Parser, Subcommand};

/// stitchplan - Cross-stitch pattern generator
#[derive(Parser, Debug)]
#[command(name = "stitchplan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate pattern images from pixel images
    Generate(generate::GenerateArgs),

    /// List the colours of a thread palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
