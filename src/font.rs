//! Monospace font resolution, done once per process.

use crate::ramp;
use fontdue::{Font, FontSettings};
use std::sync::OnceLock;

#[cfg(target_os = "windows")]
const FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/consola.ttf",
    "C:/Windows/Fonts/cour.ttf",
    "C:/Windows/Fonts/courbd.ttf",
    "C:/Windows/Fonts/lucon.ttf",
];

#[cfg(target_os = "macos")]
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Courier New.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
];

/// Ordered dither threshold map for the built-in fallback glyphs.
#[rustfmt::skip]
const BAYER_4X4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

/// Coverage bitmap for one glyph: 0 = background, 255 = full ink.
/// `xmin`/`ymin` follow fontdue's baseline-relative metrics.
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub coverage: Vec<u8>,
}

/// Where glyph coverage comes from: a parsed system font, or the built-in
/// fixed-width density renderer when no candidate file parses.
pub enum GlyphSource {
    Truetype(Font),
    Builtin,
}

impl GlyphSource {
    /// Rasterize `glyph` at `px` pixels.
    ///
    /// The built-in path draws an ordered-dither block whose ink coverage
    /// matches the glyph's position in the ramp, so fallback output still
    /// reads as a density gradient.
    pub fn rasterize(&self, glyph: char, px: f32) -> GlyphBitmap {
        match self {
            GlyphSource::Truetype(font) => {
                let (metrics, coverage) = font.rasterize(glyph, px);
                GlyphBitmap {
                    width: metrics.width,
                    height: metrics.height,
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    coverage,
                }
            }
            GlyphSource::Builtin => {
                let width = ((px * 0.6).round() as usize).max(1);
                let height = ((px * 0.7).round() as usize).max(1);
                let density = ramp::ink_density(glyph);
                let threshold = (density * 16.0).round() as u8;
                let mut coverage = vec![0u8; width * height];
                for y in 0..height {
                    for x in 0..width {
                        if BAYER_4X4[y % 4][x % 4] < threshold {
                            coverage[y * width + x] = 255;
                        }
                    }
                }
                GlyphBitmap { width, height, xmin: 0, ymin: 0, coverage }
            }
        }
    }
}

static MONO_FONT: OnceLock<GlyphSource> = OnceLock::new();

/// The process-wide monospace glyph source, resolved on first use and held
/// for the process lifetime.
pub fn glyph_source() -> &'static GlyphSource {
    MONO_FONT.get_or_init(load_monospace)
}

fn load_monospace() -> GlyphSource {
    for path in FONT_CANDIDATES {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => {
                log::debug!("using monospace font {path}");
                return GlyphSource::Truetype(font);
            }
            Err(error) => log::debug!("skipping font {path}: {error}"),
        }
    }
    log::warn!("no system monospace font found, falling back to built-in block glyphs");
    GlyphSource::Builtin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink(bitmap: &GlyphBitmap) -> usize {
        bitmap.coverage.iter().filter(|&&c| c > 0).count()
    }

    #[test]
    fn builtin_dense_glyph_has_full_coverage() {
        let bitmap = GlyphSource::Builtin.rasterize('$', 8.0);
        assert_eq!(ink(&bitmap), bitmap.width * bitmap.height);
    }

    #[test]
    fn builtin_space_has_no_coverage() {
        let bitmap = GlyphSource::Builtin.rasterize(' ', 8.0);
        assert_eq!(ink(&bitmap), 0);
    }

    #[test]
    fn builtin_coverage_tracks_density() {
        let dense = ink(&GlyphSource::Builtin.rasterize('W', 10.0));
        let sparse = ink(&GlyphSource::Builtin.rasterize('.', 10.0));
        assert!(dense > sparse);
    }

    #[test]
    fn builtin_bitmap_never_degenerates() {
        let bitmap = GlyphSource::Builtin.rasterize('#', 1.0);
        assert!(bitmap.width >= 1 && bitmap.height >= 1);
        assert_eq!(bitmap.coverage.len(), bitmap.width * bitmap.height);
    }
}
