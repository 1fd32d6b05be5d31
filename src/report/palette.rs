//! Brand palette and per-dimension colors.
//!
//! Read-only constants with no lifecycle beyond process start.

use serde::Serialize;

use crate::scoring::Dimension;
use crate::scoring::NeophobiaBand;

/// An RGB color with alpha, as used by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0.0, 1.0]`.
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Hex form without alpha, e.g. `#FF6B35`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const TANGERINE: Color = Color::rgb(0xFF, 0x6B, 0x35);
pub const LEAF: Color = Color::rgb(0x52, 0xB7, 0x88);
pub const SUNSHINE: Color = Color::rgb(0xFF, 0xD9, 0x3D);
pub const BERRY: Color = Color::rgb(0x9B, 0x5D, 0xE5);
pub const OCEAN: Color = Color::rgb(0x00, 0xBB, 0xF9);
pub const BLOSSOM: Color = Color::rgb(0xFF, 0x85, 0xA1);
pub const CLOUD: Color = Color::rgb(0xFF, 0xF8, 0xF0);
pub const MIDNIGHT: Color = Color::rgb(0x2C, 0x2C, 0x2C);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const LIGHT_GREY: Color = Color::rgb(0xED, 0xED, 0xED);
pub const MID_GREY: Color = Color::rgb(0x8C, 0x8C, 0x8C);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// Banner stripe colors, left to right.
pub const BANNER_STRIPES: [Color; 6] = [TANGERINE, SUNSHINE, LEAF, OCEAN, BERRY, BLOSSOM];

/// Stroke/badge colors cycled across the numbered suggestion cards.
pub const SWAP_CARD_CYCLE: [Color; 3] = [LEAF, OCEAN, SUNSHINE];

/// Accent color for a flavour dimension.
pub fn dimension_color(dimension: Dimension) -> Color {
    match dimension {
        Dimension::Sweet => BLOSSOM,
        Dimension::Salty => OCEAN,
        Dimension::Sour => LEAF,
        Dimension::Umami => BERRY,
        Dimension::Crunchy => TANGERINE,
        Dimension::Adventurous => SUNSHINE,
    }
}

/// Fill color for the neophobia meter, by band.
pub fn band_color(band: NeophobiaBand) -> Color {
    match band {
        NeophobiaBand::Neophobic => BLOSSOM,
        NeophobiaBand::Moderate => SUNSHINE,
        NeophobiaBand::Adventurous => LEAF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(TANGERINE.hex(), "#FF6B35");
        assert_eq!(WHITE.hex(), "#FFFFFF");
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let overlay = BLACK.with_alpha(0.28);
        assert_eq!(overlay.r, 0);
        assert!((overlay.a - 0.28).abs() < f32::EPSILON);
    }

    #[test]
    fn test_every_dimension_has_a_distinct_color() {
        let colors: Vec<String> = Dimension::ALL
            .iter()
            .map(|d| dimension_color(*d).hex())
            .collect();
        let mut unique = colors.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), colors.len());
    }
}
