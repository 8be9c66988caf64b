//! Colours shared by the file renderers and the GUI painter.
//!
//! Backend-neutral: the plotters adapter and the egui painter each convert
//! [`Rgba`] into their own colour type.

use crate::models::Theme;
use serde::{Deserialize, Serialize};

/// RGBA colour representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA colour.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same colour with an opacity in `0.0..=1.0`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Opacity as a fraction.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// `#RRGGBB` hex string (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fill of the interquartile box (`#4F46E5`).
pub const ACCENT: Rgba = Rgba::rgb(79, 70, 229);

/// Opacity of the interquartile box fill.
pub const BOX_OPACITY: f64 = 0.7;

/// Axis labels are drawn in a muted grey on both themes.
pub const AXIS_LABEL: Rgba = Rgba::rgb(128, 128, 128);

/// Stroke for the baseline and marker ticks: black on light, white on dark.
pub fn stroke_color(theme: Theme) -> Rgba {
    match theme {
        Theme::Light => Rgba::rgb(0, 0, 0),
        Theme::Dark => Rgba::rgb(255, 255, 255),
    }
}

/// Canvas background for file output.
pub fn background_color(theme: Theme) -> Rgba {
    match theme {
        Theme::Light => Rgba::rgb(255, 255, 255),
        Theme::Dark => Rgba::rgb(17, 24, 39),
    }
}

/// Box fill with its opacity applied.
pub fn box_fill() -> Rgba {
    ACCENT.with_opacity(BOX_OPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_flips_with_theme() {
        assert_eq!(stroke_color(Theme::Light).to_hex(), "#000000");
        assert_eq!(stroke_color(Theme::Dark).to_hex(), "#FFFFFF");
    }

    #[test]
    fn box_fill_is_accent_at_seventy_percent() {
        let fill = box_fill();
        assert_eq!(fill.to_hex(), "#4F46E5");
        assert!((fill.opacity() - 0.7).abs() < 0.01);
    }
}
