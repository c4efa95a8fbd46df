//! Generate command implementation.
//!
//! Turns input images into pattern-plan PNGs.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StitchError};
use crate::output::{display_path, plural, Printer};
use crate::render::{generate_plan, open_image, write_png, FontText, NullText, TextRenderer};
use crate::types::Palette;

/// Hard cap on input dimensions. Keeps the quadratic assignment dedup scan
/// bounded and the output canvas printable.
pub const MAX_DIMENSION: u32 = 128;

/// Generate pattern images from pixel images
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input images to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Thread palette JSON file (builtin DMC palette if omitted)
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// TTF/OTF font for legend text (legend text is skipped if omitted)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| StitchError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let palette = load_palette(&args)?;
    let text = load_text_renderer(&args, &printer)?;

    let mut generated = 0;
    for file in &args.files {
        let source = open_image(file)?;

        if source.width() > MAX_DIMENSION || source.height() > MAX_DIMENSION {
            return Err(StitchError::Validation {
                message: format!(
                    "{} is {}x{}, the maximum dimension is {}x{}",
                    display_path(file),
                    source.width(),
                    source.height(),
                    MAX_DIMENSION,
                    MAX_DIMENSION
                ),
                help: Some("Downscale the image before generating a pattern".to_string()),
            });
        }

        let plan = generate_plan(&source, &palette, text.as_ref());

        for warning in &plan.warnings {
            printer.warning("Skipped", warning);
        }

        let out_path = output_path(&args.output, file);
        write_png(&plan.image, &out_path, args.scale)?;

        printer.status(
            "Generating",
            &format!(
                "{} ({}x{}) -> {}",
                display_path(file),
                source.width(),
                source.height(),
                printer.cyan(&display_path(&out_path))
            ),
        );
        generated += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} with the {} palette",
            plural(generated, "pattern", "patterns"),
            palette.name()
        ),
    );

    Ok(())
}

fn load_palette(args: &GenerateArgs) -> Result<Palette> {
    match &args.palette {
        Some(path) => Palette::load(path),
        None => Palette::dmc(),
    }
}

/// Load the legend text renderer. A missing or unparsable font degrades to
/// a renderer that skips text with a warning instead of failing the run.
fn load_text_renderer(args: &GenerateArgs, printer: &Printer) -> Result<Box<dyn TextRenderer>> {
    match &args.font {
        Some(path) => match FontText::load(path) {
            Ok(font) => Ok(Box::new(font)),
            Err(e) => {
                printer.warning(
                    "Ignoring",
                    &format!("{}: {} (legend text will be skipped)", display_path(path), e),
                );
                Ok(Box::new(NullText))
            }
        },
        None => Ok(Box::new(NullText)),
    }
}

/// Output file path: `<output>/<stem>.plan.png`.
fn output_path(output: &std::path::Path, input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern");
    output.join(format!("{}.plan.png", stem))
}
