/*!
 * GUI application for fivenum-rs - five-number summary and box plot viewer
 *
 * A cross-platform desktop application providing:
 * - Loading a CSV file through a file dialog or by dropping it on the window
 * - The five-number summary of every number in the file
 * - An interactive box plot with hover tooltips and a light/dark theme toggle
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use fivenum_rs::app::Results;
use fivenum_rs::ingest;
use fivenum_rs::style::Rgba;
use fivenum_rs::viz::{RenderScene, Shape, TickSet};
use fivenum_rs::{AppEvent, AppState, IngestError, Theme};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([480.0, 360.0])
            .with_drag_and_drop(true)
            .with_title("Five Number Summary - fivenum-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Five Number Summary",
        options,
        Box::new(|cc| {
            apply_theme(&cc.egui_ctx, Theme::default());
            Ok(Box::new(FivenumApp::new()))
        }),
    )
}

/// A finished background read: display name and file content.
type LoadResult = (String, Result<String, IngestError>);

/// Main application state
struct FivenumApp {
    state: AppState,

    // Chart options mirrored from the state's config
    tick_set: TickSet,
    show_axis: bool,
    strict: bool,

    // UI state
    is_loading: bool,
    last_dir: Option<PathBuf>,

    // Background file read; a newer load replaces the receiver, so a stale
    // result is simply never received.
    load_receiver: Option<mpsc::Receiver<LoadResult>>,
}

impl FivenumApp {
    fn new() -> Self {
        let state = AppState::default();
        Self {
            tick_set: state.config().tick_set,
            show_axis: state.config().show_axis,
            strict: false,
            state,
            is_loading: false,
            last_dir: dirs::home_dir(),
            load_receiver: None,
        }
    }

    fn start_load(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.last_dir = path.parent().map(PathBuf::from);
        self.is_loading = true;

        let (sender, receiver) = mpsc::channel();
        self.load_receiver = Some(receiver);

        thread::spawn(move || {
            let content = ingest::read_text(&path);
            let _ = sender.send((name, content));
        });
    }

    fn pick_file(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("CSV", &["csv", "txt"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.start_load(path);
        }
    }

    /// Only the first of several dropped files is used.
    fn check_dropped_files(&mut self, ctx: &egui::Context) {
        let Some(file) = ctx.input(|i| i.raw.dropped_files.first().cloned()) else {
            return;
        };
        if let Some(bytes) = file.bytes {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            self.is_loading = false;
            self.load_receiver = None;
            self.state.handle(AppEvent::FileLoaded {
                name: file.name,
                content: Ok(text),
            });
        } else if let Some(path) = file.path {
            self.start_load(path);
        }
    }

    fn check_load_result(&mut self) {
        if let Some(receiver) = &self.load_receiver
            && let Ok((name, content)) = receiver.try_recv()
        {
            self.is_loading = false;
            self.load_receiver = None;
            self.state.handle(AppEvent::FileLoaded { name, content });
        }
    }

    fn sync_options(&mut self) {
        self.state.parse_mode = if self.strict {
            fivenum_rs::ParseMode::Strict
        } else {
            fivenum_rs::ParseMode::Lenient
        };
        let mut config = self.state.config().clone();
        config.tick_set = self.tick_set;
        config.show_axis = self.show_axis;
        self.state.set_config(config);
    }

    fn results_panel(&self, ui: &mut egui::Ui) {
        match self.state.results() {
            Results::Empty => {
                ui.label("No data loaded yet.");
            }
            Results::Summary { source, lines } => {
                ui.heading("Five Number Summary");
                ui.label(egui::RichText::new(source).weak());
                for line in lines {
                    let (label, value) = line.split_once(": ").unwrap_or((line.as_str(), ""));
                    ui.horizontal(|ui| {
                        ui.strong(format!("{label}:"));
                        ui.label(value);
                    });
                }
            }
            Results::Error(message) => {
                ui.colored_label(egui::Color32::RED, message);
            }
        }
    }

    fn chart_panel(&mut self, ui: &mut egui::Ui) {
        let Some(scene) = self.state.scene() else {
            return;
        };
        let width = ui.available_width();
        let height = width * scene.height as f32 / scene.width.max(1) as f32;
        let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
        let view = SceneView::fit(scene, response.rect);
        paint_scene(&painter, scene, &view);

        let pointer = response.hover_pos().map(|p| view.to_scene(p));
        self.state.handle(AppEvent::PointerMoved(pointer));

        if let (Some(tip), Some(at)) = (self.state.tooltip(), pointer) {
            let anchor = view.tooltip_anchor(at, self.state.config().tooltip_offset);
            paint_tooltip(ui.ctx(), &tip.text, anchor);
        }
    }
}

impl eframe::App for FivenumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background reads and dropped files
        self.check_load_result();
        self.check_dropped_files(ctx);

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Five Number Summary & Box Plot");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(self.state.theme().toggle_label()).clicked() {
                            self.state.handle(AppEvent::ThemeToggled);
                            apply_theme(ctx, self.state.theme());
                        }
                    });
                });
                ui.add_space(10.0);

                // Drop target / file picker
                let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        let hint = if hovering_files {
                            "Release to load the file"
                        } else {
                            "Drop a CSV file here, or"
                        };
                        ui.label(hint);
                        if ui
                            .add_enabled(!self.is_loading, egui::Button::new("Open CSV…"))
                            .clicked()
                        {
                            self.pick_file();
                        }
                        if self.is_loading {
                            ui.spinner();
                        }
                    });
                });

                ui.add_space(10.0);

                ui.collapsing("Options", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Markers:");
                        ui.radio_value(&mut self.tick_set, TickSet::Five, "Min, Q1, Median, Q3, Max");
                        ui.radio_value(&mut self.tick_set, TickSet::Three, "Min, Median, Max");
                    });
                    ui.checkbox(&mut self.show_axis, "Show axis labels");
                    ui.checkbox(&mut self.strict, "Strict parsing (applies to the next load)")
                        .on_hover_text("Reject files containing non-numeric values instead of skipping them");
                });
                self.sync_options();

                ui.add_space(10.0);
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width());
                    self.results_panel(ui);
                });

                ui.add_space(10.0);
                self.chart_panel(ui);
            });
        });
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Uniform scale + offset from scene pixels to screen points, like an SVG
/// viewBox with `xMidYMid meet`.
struct SceneView {
    origin: egui::Pos2,
    scale: f32,
}

impl SceneView {
    fn fit(scene: &RenderScene, rect: egui::Rect) -> Self {
        let sx = rect.width() / scene.width.max(1) as f32;
        let sy = rect.height() / scene.height.max(1) as f32;
        let scale = sx.min(sy);
        let used = egui::vec2(scene.width as f32 * scale, scene.height as f32 * scale);
        let origin = rect.min + (rect.size() - used) / 2.0;
        Self { origin, scale }
    }

    fn to_screen(&self, (x, y): (f32, f32)) -> egui::Pos2 {
        self.origin + egui::vec2(x, y) * self.scale
    }

    fn to_scene(&self, p: egui::Pos2) -> (f32, f32) {
        let v = (p - self.origin) / self.scale;
        (v.x, v.y)
    }

    /// Screen position of a tooltip for a pointer at `pointer` (scene pixels).
    /// The offset is in screen points and does not grow with the view scale.
    fn tooltip_anchor(&self, pointer: (f32, f32), (dx, dy): (f32, f32)) -> egui::Pos2 {
        self.to_screen(pointer) + egui::vec2(dx, dy)
    }
}

fn paint_scene(painter: &egui::Painter, scene: &RenderScene, view: &SceneView) {
    // The panel fill comes from the egui visuals, so `scene.background` is not painted.
    for p in &scene.primitives {
        let color = color32(p.color);
        match &p.shape {
            Shape::Segment { from, to, width } => {
                painter.line_segment(
                    [view.to_screen(*from), view.to_screen(*to)],
                    egui::Stroke::new(width * view.scale.max(1.0), color),
                );
            }
            Shape::Rect { min, max } => {
                let rect = egui::Rect::from_min_max(view.to_screen(*min), view.to_screen(*max));
                painter.rect_filled(rect, 0.0, color);
            }
            Shape::Label { at, text, size } => {
                painter.text(
                    view.to_screen(*at),
                    egui::Align2::CENTER_TOP,
                    text,
                    egui::FontId::proportional(size * view.scale),
                    color,
                );
            }
        }
    }
}

fn paint_tooltip(ctx: &egui::Context, text: &str, at: egui::Pos2) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("boxplot_tooltip"),
    ));
    let visuals = ctx.style().visuals.clone();
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(13.0),
        visuals.text_color(),
    );
    let bg = egui::Rect::from_min_size(at, galley.size()).expand(4.0);
    painter.rect_filled(bg, 3.0, visuals.window_fill);
    painter.rect_stroke(bg, 3.0, visuals.window_stroke);
    painter.galley(at, galley, visuals.text_color());
}
