use clap::Parser;
use miette::Result;
use stitchplan::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => stitchplan::cli::generate::run(args)?,
        Commands::Palette(args) => stitchplan::cli::palette::run(args)?,
        Commands::Completions(args) => stitchplan::cli::completions::run(args)?,
    }

    Ok(())
}
