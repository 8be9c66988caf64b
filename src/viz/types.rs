//! Public types and defaults for the visualization module.

use serde::{Deserialize, Serialize};

/// Which marker ticks are drawn across the box plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickSet {
    /// Min, median, max.
    Three,
    /// Min, Q1, median, Q3, max.
    #[default]
    Five,
}

/// Space kept free around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 30.0,
        }
    }
}

/// Chart layout and behaviour. Every field has a default, so a partial JSON
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub margins: Margins,
    /// Height of the interquartile box; marker ticks span the same height.
    pub box_height: f32,
    pub stroke_width: f32,
    pub tick_set: TickSet,
    /// Draw a numeric axis below the plot.
    pub show_axis: bool,
    /// Requested number of axis intervals (actual ticks land on round values).
    pub axis_ticks: usize,
    /// Horizontal slack when hovering a marker tick.
    pub hover_tolerance_px: f32,
    /// Tooltip position relative to the pointer.
    pub tooltip_offset: (f32, f32),
    /// Locale tag for number formatting (`en`, `de`, `fr`, ...).
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margins: Margins::default(),
            box_height: 40.0,
            stroke_width: 1.0,
            tick_set: TickSet::default(),
            show_axis: false,
            axis_ticks: 10,
            hover_tolerance_px: 3.0,
            tooltip_offset: (10.0, -20.0),
            locale: "en".to_string(),
        }
    }
}

impl ChartConfig {
    /// Width of the plotting area between the left and right margins.
    pub fn inner_width(&self) -> f32 {
        (self.width as f32 - self.margins.left - self.margins.right).max(0.0)
    }

    /// Height of the plotting area between the top and bottom margins.
    pub fn inner_height(&self) -> f32 {
        (self.height as f32 - self.margins.top - self.margins.bottom).max(0.0)
    }
}

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 220;
