use crate::style::{self, Rgba};
use crate::summary::FiveNumberSummary;
use serde::{Deserialize, Serialize};

/// Numbers extracted from one input file, in file order until the summary step sorts them.
pub type NumericSample = Vec<f64>;

/// Visual theme of the chart. Only the stroke colour depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Stroke colour for the baseline and marker ticks.
    pub fn stroke_color(self) -> Rgba {
        style::stroke_color(self)
    }

    /// Caption of the toggle control, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀ Light Mode",
        }
    }
}

/// The last loaded dataset: the sorted sample and its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sample: NumericSample,
    pub summary: FiveNumberSummary,
}

impl Dataset {
    /// Summarize `sample` and keep both.
    pub fn from_sample(sample: NumericSample) -> Result<Self, crate::summary::SummaryError> {
        let mut sample = sample;
        let summary = crate::summary::summarize_in_place(&mut sample)?;
        Ok(Self { sample, summary })
    }
}
