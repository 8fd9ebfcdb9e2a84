//! Resampling - shrink the source image to the glyph grid.

use crate::detail::DetailProfile;
use crate::{CharpaintError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Grid dimensions for a source of `width` x `height` under `profile`.
///
/// The height is additionally squeezed by the cell aspect ratio so the
/// output keeps the source's proportions once every grid cell is blown
/// back up to a `cell_width` x `cell_height` pixel block.
pub fn grid_dimensions(width: u32, height: u32, profile: &DetailProfile) -> (u32, u32) {
    let aspect = profile.cell_width as f32 / profile.cell_height as f32;
    let gw = (profile.scale * width as f32) as u32;
    let gh = (profile.scale * height as f32 * aspect) as u32;
    (gw, gh)
}

/// Downsample `source` to the glyph grid for `profile`.
///
/// Fails with `ImageTooSmall` when either grid dimension floors to zero;
/// tiny sources at low scale are reported, not clamped.
pub fn resample(source: &DynamicImage, profile: &DetailProfile) -> Result<RgbImage> {
    let (gw, gh) = grid_dimensions(source.width(), source.height(), profile);
    if gw == 0 || gh == 0 {
        return Err(CharpaintError::ImageTooSmall { gw, gh });
    }
    let rgb = source.to_rgb8();
    Ok(imageops::resize(&rgb, gw, gh, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailLevel;
    use image::Rgb;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn grid_dimensions_for_all_presets_on_100x100() {
        let cases = [
            (DetailLevel::Low, (15, 8)),
            (DetailLevel::Medium, (20, 11)),
            (DetailLevel::High, (25, 15)),
            (DetailLevel::Ultra, (35, 21)),
        ];
        for (level, expected) in cases {
            let profile = level.profile();
            assert_eq!(
                grid_dimensions(100, 100, &profile),
                expected,
                "wrong grid for {}",
                level.name()
            );
        }
    }

    #[test]
    fn resample_produces_grid_sized_image() {
        let source = solid(100, 100, [128, 128, 128]);
        let grid = resample(&source, &DetailLevel::High.profile()).unwrap();
        assert_eq!(grid.dimensions(), (25, 15));
    }

    #[test]
    fn resample_preserves_solid_color() {
        let source = solid(80, 60, [10, 200, 30]);
        let grid = resample(&source, &DetailLevel::Medium.profile()).unwrap();
        for pixel in grid.pixels() {
            assert_eq!(*pixel, Rgb([10, 200, 30]));
        }
    }

    #[test]
    fn one_pixel_source_is_too_small() {
        let source = solid(1, 1, [255, 255, 255]);
        let err = resample(&source, &DetailLevel::Low.profile()).unwrap_err();
        assert!(matches!(err, CharpaintError::ImageTooSmall { gw: 0, gh: 0 }));
    }

    #[test]
    fn zero_height_grid_is_too_small() {
        // Wide enough for a few columns, too flat for a single row.
        let source = solid(40, 1, [0, 0, 0]);
        let err = resample(&source, &DetailLevel::High.profile()).unwrap_err();
        assert!(matches!(err, CharpaintError::ImageTooSmall { gh: 0, .. }));
    }
}
