//! Adapter helpers to draw a [`RenderScene`] with the plotters crate.
//!
//! Scene coordinates are canvas pixels, which is exactly the coordinate
//! system of a plain `DrawingArea<DB, Shift>`, so no chart builder is needed.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::style::Rgba;
use crate::viz::scene::{Point, RenderScene, Shape};

pub fn rgba_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.opacity())
}

/// Build a ShapeStyle for line strokes.
pub fn line_style(c: Rgba, width: f32) -> ShapeStyle {
    ShapeStyle {
        color: rgba_color(c),
        filled: false,
        stroke_width: width.round().max(1.0) as u32,
    }
}

/// Build a filled style for rectangles.
pub fn fill_style(c: Rgba) -> ShapeStyle {
    rgba_color(c).filled()
}

fn px((x, y): Point) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Clear `root` and draw every primitive of `scene` onto it.
///
/// Text labels need a registered font on raster backends; pass
/// `draw_labels = false` there when none is available.
pub fn draw_scene<DB>(root: &DrawingArea<DB, Shift>, scene: &RenderScene, draw_labels: bool) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&rgba_color(scene.background))
        .map_err(|e| anyhow!("{:?}", e))?;

    for p in &scene.primitives {
        match &p.shape {
            Shape::Segment { from, to, width } => {
                root.draw(&PathElement::new(vec![px(*from), px(*to)], line_style(p.color, *width)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Shape::Rect { min, max } => {
                root.draw(&Rectangle::new([px(*min), px(*max)], fill_style(p.color)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Shape::Label { at, text, size } if draw_labels => {
                let color = rgba_color(p.color);
                let style = TextStyle::from(("sans-serif", *size as f64).into_font())
                    .color(&color)
                    .pos(Pos::new(HPos::Center, VPos::Top));
                root.draw(&Text::new(text.clone(), px(*at), style))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            Shape::Label { .. } => {}
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
