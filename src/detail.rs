//! Detail presets - the four named scale/cell/font parameter bundles.

use crate::{CharpaintError, Result};
use std::str::FromStr;

/// Parameters for one conversion: resample scale, output cell size in
/// pixels, and the glyph point size drawn into each cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailProfile {
    pub scale: f32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub font_size: u32,
}

/// The closed set of detail presets. Higher detail means a finer grid and
/// smaller cells, so more glyphs per source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

impl DetailLevel {
    pub fn profile(self) -> DetailProfile {
        match self {
            DetailLevel::Low => DetailProfile { scale: 0.15, cell_width: 8, cell_height: 14, font_size: 10 },
            DetailLevel::Medium => DetailProfile { scale: 0.20, cell_width: 7, cell_height: 12, font_size: 9 },
            DetailLevel::High => DetailProfile { scale: 0.25, cell_width: 6, cell_height: 10, font_size: 8 },
            DetailLevel::Ultra => DetailProfile { scale: 0.35, cell_width: 5, cell_height: 8, font_size: 7 },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DetailLevel::Low => "Low",
            DetailLevel::Medium => "Medium",
            DetailLevel::High => "High",
            DetailLevel::Ultra => "Ultra",
        }
    }

    /// Resolve a preset by name. Unknown names are a defined failure, not
    /// an unchecked lookup.
    pub fn resolve(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "low" => Ok(DetailLevel::Low),
            "medium" => Ok(DetailLevel::Medium),
            "high" => Ok(DetailLevel::High),
            "ultra" => Ok(DetailLevel::Ultra),
            _ => Err(CharpaintError::InvalidDetailLevel(name.to_string())),
        }
    }
}

impl FromStr for DetailLevel {
    type Err = CharpaintError;

    fn from_str(s: &str) -> Result<Self> {
        DetailLevel::resolve(s)
    }
}
