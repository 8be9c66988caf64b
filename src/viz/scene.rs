//! Backend-independent description of a box plot.
//!
//! [`build_scene`] maps a [`FiveNumberSummary`] onto pixel coordinates and
//! returns every primitive to draw, tagged with its semantic [`Role`]. The
//! plotters adapter and the GUI painter only translate primitives into draw
//! calls, so all geometry and hover logic lives (and is tested) here.

use crate::models::Theme;
use crate::style::{self, Rgba};
use crate::summary::FiveNumberSummary;

use super::types::{ChartConfig, TickSet};
use super::util::{estimate_text_width_px, format_value, nice_ticks};

/// A point in canvas pixels, origin top-left.
pub type Point = (f32, f32);

const AXIS_GAP_PX: f32 = 6.0;
const AXIS_TICK_PX: f32 = 5.0;
const AXIS_FONT_PX: f32 = 11.0;

/// Linear map from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `v`. A zero-width domain maps everything to the middle of the range.
    /// Any non-zero width counts, however small the values are.
    pub fn map(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        (r0 as f64 + (v - d0) / span * (r1 - r0) as f64) as f32
    }
}

/// What a primitive stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// Whisker line from min to max.
    Baseline,
    /// Interquartile box.
    Box { q1: f64, q3: f64 },
    /// Vertical tick at one of the summary values.
    Marker { label: &'static str, value: f64 },
    AxisLine,
    AxisTick { value: f64 },
    AxisLabel { value: f64 },
}

impl Role {
    /// Only the box and the marker ticks react to the pointer.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Role::Box { .. } | Role::Marker { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Segment { from: Point, to: Point, width: f32 },
    Rect { min: Point, max: Point },
    Label { at: Point, text: String, size: f32 },
}

/// One drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub role: Role,
    pub shape: Shape,
    pub color: Rgba,
    /// Hover text, present on interactive primitives only.
    pub tooltip: Option<String>,
}

impl Primitive {
    fn contains(&self, (x, y): Point, tolerance: f32) -> bool {
        match &self.shape {
            Shape::Rect { min, max } => x >= min.0 && x <= max.0 && y >= min.1 && y <= max.1,
            Shape::Segment { from, to, .. } => {
                let (x0, x1) = (from.0.min(to.0), from.0.max(to.0));
                let (y0, y1) = (from.1.min(to.1), from.1.max(to.1));
                x >= x0 - tolerance && x <= x1 + tolerance && y >= y0 - tolerance && y <= y1 + tolerance
            }
            Shape::Label { .. } => false,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

/// Floating label shown while the pointer is over an interactive primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Top-left corner, already offset from the pointer.
    pub at: Point,
}

/// Everything needed to draw one box plot, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub primitives: Vec<Primitive>,
    hover_tolerance: f32,
    tooltip_offset: (f32, f32),
}

impl RenderScene {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives with the given role discriminant, e.g. all markers.
    pub fn with_role<'a>(&'a self, pred: impl Fn(&Role) -> bool + 'a) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.primitives.iter().filter(move |p| pred(&p.role))
    }

    /// Topmost interactive primitive under `pos`. Marker ticks are drawn after
    /// the box, so they win where the two overlap.
    pub fn hit_test(&self, pos: Point) -> Option<&Primitive> {
        self.primitives
            .iter()
            .rev()
            .filter(|p| p.role.is_interactive())
            .find(|p| p.contains(pos, self.hover_tolerance))
    }

    /// Tooltip for a pointer at `pos`, or `None` when nothing is hovered.
    pub fn tooltip_at(&self, pos: Point) -> Option<Tooltip> {
        let hit = self.hit_test(pos)?;
        let text = hit.tooltip()?.to_string();
        let (dx, dy) = self.tooltip_offset;
        Some(Tooltip {
            text,
            at: (pos.0 + dx, pos.1 + dy),
        })
    }
}

/// Map a summary onto the canvas described by `config`.
pub fn build_scene(summary: &FiveNumberSummary, theme: Theme, config: &ChartConfig) -> RenderScene {
    let m = config.margins;
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();
    let x = LinearScale::new((summary.min, summary.max), (m.left, m.left + inner_w));
    let center = m.top + inner_h / 2.0;
    let half_box = config.box_height / 2.0;
    let stroke = theme.stroke_color();
    let locale = config.locale.as_str();

    let mut primitives = Vec::new();

    primitives.push(Primitive {
        role: Role::Baseline,
        shape: Shape::Segment {
            from: (x.map(summary.min), center),
            to: (x.map(summary.max), center),
            width: config.stroke_width,
        },
        color: stroke,
        tooltip: None,
    });

    primitives.push(Primitive {
        role: Role::Box {
            q1: summary.q1,
            q3: summary.q3,
        },
        shape: Shape::Rect {
            min: (x.map(summary.q1), center - half_box),
            max: (x.map(summary.q3), center + half_box),
        },
        color: style::box_fill(),
        tooltip: Some(format!(
            "IQR: {} – {} = {}",
            format_value(summary.q3, locale),
            format_value(summary.q1, locale),
            format_value(summary.iqr(), locale)
        )),
    });

    for (label, value) in summary.labelled() {
        if config.tick_set == TickSet::Three && matches!(label, "Q1" | "Q3") {
            continue;
        }
        let px = x.map(value);
        primitives.push(Primitive {
            role: Role::Marker { label, value },
            shape: Shape::Segment {
                from: (px, center - half_box),
                to: (px, center + half_box),
                width: config.stroke_width,
            },
            color: stroke,
            tooltip: Some(format!("{label}: {}", format_value(value, locale))),
        });
    }

    if config.show_axis {
        push_axis(&mut primitives, summary, &x, config, stroke);
    }

    RenderScene {
        width: config.width,
        height: config.height,
        background: style::background_color(theme),
        primitives,
        hover_tolerance: config.hover_tolerance_px,
        tooltip_offset: config.tooltip_offset,
    }
}

fn push_axis(
    out: &mut Vec<Primitive>,
    summary: &FiveNumberSummary,
    x: &LinearScale,
    config: &ChartConfig,
    stroke: Rgba,
) {
    let m = config.margins;
    let y = m.top + config.inner_height();
    let inner_w = config.inner_width();

    // Halve the tick count until the labels fit side by side.
    let mut count = config.axis_ticks.max(1);
    let ticks = loop {
        let ticks = nice_ticks(summary.min, summary.max, count);
        let needed: u32 = ticks
            .iter()
            .map(|t| estimate_text_width_px(&format_value(*t, &config.locale), AXIS_FONT_PX as u32) + 4)
            .sum();
        if needed as f32 <= inner_w || count == 1 {
            break ticks;
        }
        count /= 2;
    };

    out.push(Primitive {
        role: Role::AxisLine,
        shape: Shape::Segment {
            from: (m.left, y),
            to: (m.left + inner_w, y),
            width: config.stroke_width,
        },
        color: stroke,
        tooltip: None,
    });
    for value in ticks {
        let px = x.map(value);
        out.push(Primitive {
            role: Role::AxisTick { value },
            shape: Shape::Segment {
                from: (px, y),
                to: (px, y + AXIS_TICK_PX),
                width: config.stroke_width,
            },
            color: stroke,
            tooltip: None,
        });
        out.push(Primitive {
            role: Role::AxisLabel { value },
            shape: Shape::Label {
                at: (px, y + AXIS_TICK_PX + AXIS_GAP_PX),
                text: format_value(value, &config.locale),
                size: AXIS_FONT_PX,
            },
            color: style::AXIS_LABEL,
            tooltip: None,
        });
    }
}
