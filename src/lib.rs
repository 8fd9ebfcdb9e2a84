//! Convert images to colored glyph-art rasters.
//!
//! The source image is downsampled to a coarse grid, each grid cell's
//! luminance picks a character from an ordered glyph ramp, and that
//! character is drawn at a fixed cell size in the cell's original color
//! over a light or dark background.

pub mod detail;
pub mod font;
pub mod ramp;
pub mod raster;
pub mod resample;

pub use detail::{DetailLevel, DetailProfile};
pub use ramp::Theme;

use image::{DynamicImage, RgbImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharpaintError {
    #[error("unreadable image: {0}")]
    UnreadableImage(#[source] image::ImageError),
    #[error("unknown detail level '{0}'")]
    InvalidDetailLevel(String),
    #[error("image too small: resampled grid is {gw}x{gh}")]
    ImageTooSmall { gw: u32, gh: u32 },
    #[error("conversion failed: {source}")]
    ConversionFailed { source: Box<CharpaintError> },
    #[error("failed to write output image: {0}")]
    WriteImage(#[source] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CharpaintError>;

fn wrap(cause: CharpaintError) -> CharpaintError {
    CharpaintError::ConversionFailed { source: Box::new(cause) }
}

/// Conversion pipeline: load, resample, rasterize.
///
/// Every call is a fresh, blocking computation; the only state shared
/// across calls is the process-wide font lookup in [`font`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    theme: Theme,
    detail: DetailLevel,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    /// Convert the image at `path`. Any lower-layer failure is re-raised
    /// as [`CharpaintError::ConversionFailed`] with the cause attached, so
    /// callers display one message.
    pub fn convert(&self, path: impl AsRef<Path>) -> Result<RgbImage> {
        self.run(path.as_ref()).map_err(wrap)
    }

    /// Convert an already-decoded image.
    pub fn convert_image(&self, source: &DynamicImage) -> Result<RgbImage> {
        self.render(source).map_err(wrap)
    }

    fn run(&self, path: &Path) -> Result<RgbImage> {
        let source = image::open(path).map_err(CharpaintError::UnreadableImage)?;
        self.render(&source)
    }

    fn render(&self, source: &DynamicImage) -> Result<RgbImage> {
        let profile = self.detail.profile();
        let grid = resample::resample(source, &profile)?;
        let mut rasterizer = raster::Rasterizer::new(profile, self.theme);
        Ok(rasterizer.rasterize(&grid))
    }
}

/// One-shot entry point: resolve the detail preset by name, then convert.
pub fn convert(path: impl AsRef<Path>, theme: Theme, detail: &str) -> Result<RgbImage> {
    let detail = DetailLevel::resolve(detail).map_err(wrap)?;
    Converter::new().with_theme(theme).with_detail(detail).convert(path)
}
