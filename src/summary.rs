use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Five-number summary of a sample. Quartiles use the exclusive-median method.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The five values with their display labels, in ascending order.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Min", self.min),
            ("Q1", self.q1),
            ("Median", self.median),
            ("Q3", self.q3),
            ("Max", self.max),
        ]
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SummaryError {
    #[error("no numeric data found")]
    Empty,
    #[error("sample contains a non-finite value: {0}")]
    NonFinite(f64),
}

/// Median of an already sorted slice: middle element for odd lengths,
/// mean of the two middle elements for even lengths. `None` when empty.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let m = n / 2;
    if n % 2 == 1 {
        Some(sorted[m])
    } else {
        Some((sorted[m - 1] + sorted[m]) / 2.0)
    }
}

/// Compute the five-number summary, consuming the sample.
pub fn five_number_summary(mut sample: Vec<f64>) -> Result<FiveNumberSummary, SummaryError> {
    summarize_in_place(&mut sample)
}

/// Sort `sample` ascending and compute its summary.
///
/// The lower half is `sorted[..n/2]` and the upper half `sorted[ceil(n/2)..]`,
/// so for odd `n` the median element belongs to neither half. A single-element
/// sample has empty halves; its quartiles fall back to the value itself.
pub fn summarize_in_place(sample: &mut [f64]) -> Result<FiveNumberSummary, SummaryError> {
    if let Some(bad) = sample.iter().copied().find(|v| !v.is_finite()) {
        return Err(SummaryError::NonFinite(bad));
    }
    sample.sort_by(f64::total_cmp);

    let n = sample.len();
    let (Some(&min), Some(&max)) = (sample.first(), sample.last()) else {
        return Err(SummaryError::Empty);
    };
    let mid = median(sample).ok_or(SummaryError::Empty)?;
    let q1 = median(&sample[..n / 2]).unwrap_or(mid);
    let q3 = median(&sample[n.div_ceil(2)..]).unwrap_or(mid);

    log::debug!("summarized {n} values: min={min} q1={q1} median={mid} q3={q3} max={max}");
    Ok(FiveNumberSummary {
        min,
        q1,
        median: mid,
        q3,
        max,
    })
}
