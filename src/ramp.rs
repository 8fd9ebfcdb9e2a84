//! Glyph ramp - ordered density-to-character lookup used for quantization.

use image::Rgb;

/// The 69-glyph density ramp, visually densest first.
///
/// Quantization maps a luminance in [0, 255] into this table with
/// `index = floor(luminance * 69 / 256)`; the Light theme reads it in
/// order (dark pixels get dense glyphs on a white background), the Dark
/// theme reads it reversed.
#[rustfmt::skip]
pub const GLYPH_RAMP: [char; 69] = [
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*',
    'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm',
    'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X',
    'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't',
    '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']',
    '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '\'', '.', ' ',
];

/// Visual mode: controls ramp direction and the canvas background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dense glyphs for dark pixels, white background.
    #[default]
    Light,
    /// Reversed ramp, black background.
    Dark,
}

impl Theme {
    pub fn background(self) -> Rgb<u8> {
        match self {
            Theme::Light => Rgb([255, 255, 255]),
            Theme::Dark => Rgb([0, 0, 0]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Map a luminance value to a glyph for the given theme.
///
/// Pure and total: the top index is clamped so luminance 255 stays in
/// range even when the float scaling overshoots by one.
pub fn select(luminance: u8, theme: Theme) -> char {
    let len = GLYPH_RAMP.len();
    let interval = len as f32 / 256.0;
    let index = ((luminance as f32 * interval).floor() as usize).min(len - 1);
    match theme {
        Theme::Light => GLYPH_RAMP[index],
        Theme::Dark => GLYPH_RAMP[len - 1 - index],
    }
}

/// Relative ink coverage of a ramp glyph in [0, 1], densest = 1.
///
/// Drives the built-in fallback renderer when no system font is found.
pub fn ink_density(glyph: char) -> f32 {
    match GLYPH_RAMP.iter().position(|&c| c == glyph) {
        Some(i) => 1.0 - i as f32 / (GLYPH_RAMP.len() - 1) as f32,
        None => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_index(glyph: char) -> usize {
        GLYPH_RAMP.iter().position(|&c| c == glyph).unwrap()
    }

    #[test]
    fn ramp_length_matches_reference() {
        assert_eq!(GLYPH_RAMP.len(), 69);
    }

    #[test]
    fn select_in_bounds_for_all_luminances_and_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for luminance in 0..=255u8 {
                let glyph = select(luminance, theme);
                assert!(GLYPH_RAMP.contains(&glyph), "luminance {luminance} escaped the ramp");
            }
        }
    }

    #[test]
    fn light_endpoints() {
        assert_eq!(select(0, Theme::Light), '$');
        assert_eq!(select(255, Theme::Light), ' ');
    }

    #[test]
    fn dark_endpoints_invert() {
        assert_eq!(select(0, Theme::Dark), ' ');
        assert_eq!(select(255, Theme::Dark), '$');
    }

    #[test]
    fn light_selection_is_monotone_in_ramp_index() {
        let mut previous = 0;
        for luminance in 0..=255u8 {
            let index = ramp_index(select(luminance, Theme::Light));
            assert!(index >= previous, "index regressed at luminance {luminance}");
            previous = index;
        }
    }

    #[test]
    fn dark_selection_mirrors_light() {
        for luminance in 0..=255u8 {
            let light = ramp_index(select(luminance, Theme::Light));
            let dark = ramp_index(select(luminance, Theme::Dark));
            assert_eq!(light + dark, GLYPH_RAMP.len() - 1);
        }
    }

    #[test]
    fn backgrounds_per_theme() {
        assert_eq!(Theme::Light.background(), Rgb([255, 255, 255]));
        assert_eq!(Theme::Dark.background(), Rgb([0, 0, 0]));
    }

    #[test]
    fn ink_density_spans_the_ramp() {
        assert_eq!(ink_density('$'), 1.0);
        assert_eq!(ink_density(' '), 0.0);
        assert!(ink_density('L') > ink_density(','));
    }
}
