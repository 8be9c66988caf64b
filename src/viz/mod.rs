//! Visualization: turn a five-number summary into a box plot.
//!
//! - [`scene`] builds a backend-independent list of primitives (whisker line,
//!   interquartile box, marker ticks, optional axis) and answers hover queries
//! - [`render_to_file`] draws that scene to **SVG** or **PNG** through plotters
//! - [`render_svg_string`] does the same into memory
//!
//! Every render clears the canvas first, so redrawing (e.g. after a theme
//! toggle) never accumulates elements.

pub mod scene;
pub mod types;
pub mod util;

// Re-export types for public API
pub use scene::{LinearScale, Primitive, RenderScene, Role, Shape, Tooltip, build_scene};
pub use types::{ChartConfig, Margins, TickSet};

use crate::models::Theme;
use crate::summary::FiveNumberSummary;
use crate::viz_plotters_adapter::draw_scene;
use anyhow::{Result, anyhow};

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::OnceLock;

/// Environment variable naming a TTF/OTF file used for labels in PNG output.
pub const FONT_ENV: &str = "FIVENUM_FONT";

const FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// One-time registration of a "sans-serif" font for the `ab_glyph` text path,
/// which does not discover OS fonts. Only raster output needs it: the SVG
/// backend writes `<text>` elements without measuring glyphs.
static FONT_READY: OnceLock<bool> = OnceLock::new();

fn ensure_fonts_registered() -> bool {
    *FONT_READY.get_or_init(|| {
        let env_path = std::env::var(FONT_ENV).ok();
        let candidates = env_path.iter().map(String::as_str).chain(FONT_CANDIDATES);
        for path in candidates {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            // Plotters keeps registered fonts for the life of the process.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes).is_ok() {
                log::debug!("registered label font {path}");
                return true;
            }
        }
        log::warn!("no label font found (set {FONT_ENV}); PNG output will omit axis labels");
        false
    })
}

/// Render the box plot of `summary` to `out_path`. A `.svg` extension selects
/// the SVG backend; anything else is written as a bitmap (PNG by extension).
pub fn render_to_file<P: AsRef<Path>>(
    summary: &FiveNumberSummary,
    out_path: P,
    theme: Theme,
    config: &ChartConfig,
) -> Result<()> {
    let scene = build_scene(summary, theme, config);
    render_scene_to_file(&scene, out_path)
}

/// Draw an already built scene to a file.
pub fn render_scene_to_file<P: AsRef<Path>>(scene: &RenderScene, out_path: P) -> Result<()> {
    if scene.width == 0 || scene.height == 0 {
        return Err(anyhow!("chart size must be non-zero, got {}x{}", scene.width, scene.height));
    }
    let out_path = out_path.as_ref();
    let size = (scene.width, scene.height);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        draw_scene(&root, scene, true)?;
    } else {
        let labels = ensure_fonts_registered();
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        draw_scene(&root, scene, labels)?;
    }
    log::info!("wrote box plot to {}", out_path.display());
    Ok(())
}

/// Render the box plot as an SVG document held in memory.
pub fn render_svg_string(summary: &FiveNumberSummary, theme: Theme, config: &ChartConfig) -> Result<String> {
    let scene = build_scene(summary, theme, config);
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (scene.width, scene.height)).into_drawing_area();
        draw_scene(&root, &scene, true)?;
    }
    Ok(buf)
}
