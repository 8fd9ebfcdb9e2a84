//! charpaint CLI - render an image as colored glyph art and save it.

use charpaint::{CharpaintError, Converter, DetailLevel, Theme};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "charpaint", about = "Convert images to colored glyph-art rasters")]
struct Args {
    /// Input image file
    input: PathBuf,
    /// Output image file (format from the extension)
    #[arg(short, long, default_value = "ascii_art.png")]
    output: PathBuf,
    /// Light glyphs on a black background
    #[arg(long)]
    dark: bool,
    /// Detail level: Low, Medium, High or Ultra
    #[arg(short, long, default_value = "High")]
    detail: String,
}

fn main() -> Result<(), CharpaintError> {
    let args = Args::parse();

    let theme = if args.dark { Theme::Dark } else { Theme::Light };
    let detail = DetailLevel::resolve(&args.detail)?;

    let art = Converter::new()
        .with_theme(theme)
        .with_detail(detail)
        .convert(&args.input)?;

    art.save(&args.output).map_err(CharpaintError::WriteImage)?;
    println!("wrote {}", args.output.display());
    Ok(())
}
