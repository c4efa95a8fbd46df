//! Palette listing command.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

/// List the colours of a thread palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Palette JSON file (builtin DMC palette if omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let printer = Printer::new();

    let palette = match &args.file {
        Some(path) => Palette::load(path)?,
        None => Palette::dmc()?,
    };

    printer.status(
        "Listing",
        &format!(
            "{} from the {} palette",
            plural(palette.len(), "colour", "colours"),
            palette.name()
        ),
    );

    // Machine-readable lines on stdout
    for entry in palette.entries() {
        println!("{}\t{}\t{}", entry.code, entry.colour(), entry.name);
    }

    Ok(())
}
