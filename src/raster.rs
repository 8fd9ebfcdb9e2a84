//! Rasterization - one colored glyph per grid cell onto the output canvas.

use crate::detail::DetailProfile;
use crate::font::{self, GlyphBitmap, GlyphSource};
use crate::ramp::{self, Theme};
use image::{Rgb, RgbImage};
use std::collections::HashMap;

/// Reference luminance: truncating unweighted average of the channels.
///
/// Computed as `floor(r/3 + g/3 + b/3)` in f64, per-channel division
/// first, matching the reference arithmetic exactly. Not the perceptual
/// weighting, deliberately.
pub fn luminance(pixel: Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = pixel;
    (r as f64 / 3.0 + g as f64 / 3.0 + b as f64 / 3.0).floor() as u8
}

/// Draws glyphs for one conversion pass, caching rasterized coverage per
/// character (the font size is fixed for the pass, so a glyph rasterizes
/// once no matter how many cells select it).
pub struct Rasterizer {
    profile: DetailProfile,
    theme: Theme,
    source: &'static GlyphSource,
    glyph_cache: HashMap<char, GlyphBitmap>,
}

impl Rasterizer {
    pub fn new(profile: DetailProfile, theme: Theme) -> Self {
        Self::with_source(profile, theme, font::glyph_source())
    }

    fn with_source(profile: DetailProfile, theme: Theme, source: &'static GlyphSource) -> Self {
        Self {
            profile,
            theme,
            source,
            glyph_cache: HashMap::new(),
        }
    }

    /// Render `grid` to a canvas of `(cell_width * gw, cell_height * gh)`
    /// pixels, pre-filled with the theme background. Drawing is clipped to
    /// the canvas and never fails.
    pub fn rasterize(&mut self, grid: &RgbImage) -> RgbImage {
        let (gw, gh) = grid.dimensions();
        let width = self.profile.cell_width * gw;
        let height = self.profile.cell_height * gh;
        log::debug!(
            "rasterizing {gw}x{gh} grid to {width}x{height} canvas ({} theme)",
            self.theme.name()
        );

        let mut canvas = RgbImage::from_pixel(width, height, self.theme.background());
        for (x, y, &pixel) in grid.enumerate_pixels() {
            let glyph = ramp::select(luminance(pixel), self.theme);
            self.draw_glyph(
                &mut canvas,
                glyph,
                (x * self.profile.cell_width) as i32,
                (y * self.profile.cell_height) as i32,
                pixel,
            );
        }
        canvas
    }

    fn draw_glyph(&mut self, canvas: &mut RgbImage, glyph: char, cell_x: i32, cell_y: i32, fill: Rgb<u8>) {
        let source = self.source;
        let size = self.profile.font_size as f32;
        let bitmap = self
            .glyph_cache
            .entry(glyph)
            .or_insert_with(|| source.rasterize(glyph, size));
        if bitmap.width == 0 || bitmap.height == 0 {
            return;
        }

        // Baseline sits one font-size below the cell origin; fontdue
        // metrics are baseline-relative.
        let x0 = cell_x + bitmap.xmin;
        let y0 = cell_y + self.profile.font_size as i32 - bitmap.height as i32 - bitmap.ymin;

        for row in 0..bitmap.height {
            let py = y0 + row as i32;
            if py < 0 || py >= canvas.height() as i32 {
                continue;
            }
            for col in 0..bitmap.width {
                let px = x0 + col as i32;
                if px < 0 || px >= canvas.width() as i32 {
                    continue;
                }
                let alpha = bitmap.coverage[row * bitmap.width + col];
                if alpha == 0 {
                    continue;
                }
                blend_pixel(canvas.get_pixel_mut(px as u32, py as u32), fill, alpha);
            }
        }
    }
}

fn blend_pixel(dst: &mut Rgb<u8>, src: Rgb<u8>, alpha: u8) {
    let alpha = u16::from(alpha);
    let inv_alpha = 255 - alpha;
    for channel in 0..3 {
        let blended =
            (u16::from(src.0[channel]) * alpha + u16::from(dst.0[channel]) * inv_alpha + 127) / 255;
        dst.0[channel] = blended as u8;
    }
}
