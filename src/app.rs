//! Application state shared by the front ends.
//!
//! Three independent handlers drive everything: a file finished loading, the
//! theme was toggled, the pointer moved over the chart. Each runs to
//! completion; the only cached data is the last loaded [`Dataset`], replaced
//! in a single assignment on every successful load.

use crate::error::{Error, IngestError};
use crate::ingest::{ParseMode, parse_numbers};
use crate::models::{Dataset, Theme};
use crate::summary::FiveNumberSummary;
use crate::viz::util::format_value;
use crate::viz::{ChartConfig, RenderScene, Tooltip, build_scene};

/// Input to [`AppState::handle`].
#[derive(Debug)]
pub enum AppEvent {
    /// A file read completed, successfully or not.
    FileLoaded {
        name: String,
        content: Result<String, IngestError>,
    },
    ThemeToggled,
    /// Pointer position in scene pixels, or `None` when it left the chart.
    PointerMoved(Option<(f32, f32)>),
}

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    /// Nothing loaded yet.
    Empty,
    Summary { source: String, lines: Vec<String> },
    Error(String),
}

/// The five labelled lines of the results panel.
pub fn results_lines(summary: &FiveNumberSummary, locale: &str) -> Vec<String> {
    summary
        .labelled()
        .iter()
        .map(|(label, v)| format!("{label}: {}", format_value(*v, locale)))
        .collect()
}

/// Render an error with its source chain, e.g. `failed to read x.csv: No such file`.
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub parse_mode: ParseMode,
    theme: Theme,
    config: ChartConfig,
    dataset: Option<Dataset>,
    scene: Option<RenderScene>,
    results: Results,
    tooltip: Option<Tooltip>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            parse_mode: ParseMode::default(),
            theme: Theme::default(),
            config,
            dataset: None,
            scene: None,
            results: Results::Empty,
            tooltip: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn scene(&self) -> Option<&RenderScene> {
        self.scene.as_ref()
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Dispatch one event to its handler.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::FileLoaded { name, content } => self.on_file_loaded(&name, content),
            AppEvent::ThemeToggled => self.on_theme_toggled(),
            AppEvent::PointerMoved(pos) => self.on_pointer_moved(pos),
        }
    }

    /// Parse, summarize and draw freshly loaded text. On failure the previous
    /// dataset is dropped and the error is shown instead.
    pub fn on_file_loaded(&mut self, name: &str, content: Result<String, IngestError>) {
        self.tooltip = None;
        match self.load(content) {
            Ok(dataset) => {
                log::info!("loaded {} value(s) from {name}", dataset.sample.len());
                self.results = Results::Summary {
                    source: name.to_string(),
                    lines: results_lines(&dataset.summary, &self.config.locale),
                };
                self.dataset = Some(dataset);
                self.redraw();
            }
            Err(err) => {
                log::warn!("could not load {name}: {err}");
                self.results = Results::Error(describe_error(&err));
                self.dataset = None;
                self.scene = None;
            }
        }
    }

    fn load(&self, content: Result<String, IngestError>) -> Result<Dataset, Error> {
        let text = content?;
        let sample = parse_numbers(&text, self.parse_mode)?;
        Ok(Dataset::from_sample(sample)?)
    }

    /// Flip the theme and redraw the cached dataset, if any.
    pub fn on_theme_toggled(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("theme is now {:?}", self.theme);
        self.redraw();
    }

    /// Update the tooltip for a pointer position in scene coordinates.
    pub fn on_pointer_moved(&mut self, pos: Option<(f32, f32)>) {
        self.tooltip = match (pos, &self.scene) {
            (Some(pos), Some(scene)) => scene.tooltip_at(pos),
            _ => None,
        };
    }

    /// Replace the chart configuration and redraw.
    pub fn set_config(&mut self, config: ChartConfig) {
        if config != self.config {
            if let (Some(ds), Results::Summary { lines, .. }) = (&self.dataset, &mut self.results) {
                *lines = results_lines(&ds.summary, &config.locale);
            }
            self.config = config;
            self.redraw();
        }
    }

    /// Rebuild the scene from scratch; the old one is discarded, never patched.
    fn redraw(&mut self) {
        self.tooltip = None;
        self.scene = self
            .dataset
            .as_ref()
            .map(|ds| build_scene(&ds.summary, self.theme, &self.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::five_number_summary;
    use crate::viz::TickSet;

    fn loaded(text: &str) -> AppState {
        let mut app = AppState::default();
        app.handle(AppEvent::FileLoaded {
            name: "data.csv".into(),
            content: Ok(text.to_string()),
        });
        app
    }

    #[test]
    fn load_populates_results_and_scene() {
        let app = loaded("7,1\n5,3\n");
        let Results::Summary { source, lines } = app.results() else {
            panic!("expected summary, got {:?}", app.results());
        };
        assert_eq!(source, "data.csv");
        assert_eq!(lines, &["Min: 1", "Q1: 2", "Median: 4", "Q3: 6", "Max: 7"]);
        assert_eq!(app.scene().map(RenderScene::len), Some(7));
    }

    #[test]
    fn small_values_are_not_rounded_away() {
        let app = loaded("0.00001,0.00002,0.00003,0.00004\n");
        let Results::Summary { lines, .. } = app.results() else {
            panic!("expected summary, got {:?}", app.results());
        };
        assert_eq!(lines[0], "Min: 0.00001");
        assert_eq!(lines[4], "Max: 0.00004");
        assert!(lines.iter().all(|l| !l.ends_with(": 0")), "{lines:?}");

        let lines = results_lines(&five_number_summary(vec![1e-17, 3e-17]).unwrap(), "en");
        assert_eq!(lines[0], "Min: 1e-17");
        assert_eq!(lines[4], "Max: 3e-17");
    }

    #[test]
    fn mixed_magnitudes_keep_both_ends() {
        let lines = results_lines(&five_number_summary(vec![1_000_000.0, 0.000001]).unwrap(), "en");
        assert_eq!(lines[0], "Min: 0.000001");
        assert_eq!(lines[4], "Max: 1,000,000");
    }

    #[test]
    fn theme_toggles_do_not_accumulate() {
        let mut app = loaded("1,2,3,4,5,6,7,8,9");
        let first = app.scene().unwrap().len();
        for _ in 0..5 {
            app.handle(AppEvent::ThemeToggled);
        }
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.scene().unwrap().len(), first);
    }

    #[test]
    fn theme_toggle_without_data_is_harmless() {
        let mut app = AppState::default();
        app.on_theme_toggled();
        assert!(app.scene().is_none());
        assert_eq!(app.results(), &Results::Empty);
    }

    #[test]
    fn empty_file_is_validation_error() {
        let mut app = loaded("1,2,3");
        app.on_file_loaded("empty.csv", Ok("a,b\n".into()));
        assert_eq!(app.results(), &Results::Error("no numeric data found".into()));
        assert!(app.dataset().is_none());
        assert!(app.scene().is_none());
    }

    #[test]
    fn read_failure_is_reported_with_cause() {
        let mut app = AppState::default();
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        app.on_file_loaded("x.csv", Err(IngestError::file_read("x.csv", io)));
        match app.results() {
            Results::Error(msg) => {
                assert!(msg.contains("failed to read x.csv"));
                assert!(msg.contains("gone"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hover_sets_and_clears_tooltip() {
        let mut app = loaded("7,1,5,3");
        app.handle(AppEvent::PointerMoved(Some((200.0, 100.0))));
        assert!(app.tooltip().unwrap().text.contains('4'));
        app.handle(AppEvent::PointerMoved(None));
        assert!(app.tooltip().is_none());
    }

    #[test]
    fn config_change_redraws() {
        let mut app = loaded("7,1,5,3");
        let config = ChartConfig {
            tick_set: TickSet::Three,
            ..app.config().clone()
        };
        app.set_config(config);
        assert_eq!(app.scene().map(RenderScene::len), Some(5));
    }

    #[test]
    fn strict_mode_surfaces_bad_token() {
        let mut app = AppState::default();
        app.parse_mode = ParseMode::Strict;
        app.on_file_loaded("bad.csv", Ok("1,x".into()));
        assert!(matches!(app.results(), Results::Error(msg) if msg.contains("'x'")));
    }
}
