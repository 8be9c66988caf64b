//! CSV ingestion: raw text to a flat list of numbers.
//!
//! Every field of every row is considered; the file does not have to be a
//! single column. Rows are read with the `csv` crate (no header, quoting off,
//! ragged rows allowed). Lines end at `\n`; the `\r` of a `\r\n` ending is
//! trimmed with the rest of the field's whitespace, while a lone `\r` inside a
//! line is not a line break.

use crate::error::IngestError;
use crate::models::NumericSample;
use csv::{ReaderBuilder, Terminator, Trim};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How to treat tokens that are not numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Silently drop anything that is not a finite number.
    #[default]
    Lenient,
    /// Fail on the first non-empty token that is not a finite number.
    Strict,
}

/// Parse a finite `f64`, rejecting `NaN` and infinities.
fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract all numbers from CSV text, left to right, top to bottom.
pub fn parse_numbers(text: &str, mode: ParseMode) -> Result<NumericSample, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        for (idx, token) in record.iter().enumerate() {
            if token.is_empty() {
                continue;
            }
            match parse_finite(token) {
                Some(v) => out.push(v),
                None if mode == ParseMode::Strict => {
                    return Err(IngestError::InvalidToken {
                        line,
                        column: idx + 1,
                        token: token.to_string(),
                    });
                }
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} non-numeric token(s)");
    }
    log::debug!("parsed {} number(s)", out.len());
    Ok(out)
}

/// Read a file and extract its numbers. Bytes that are not valid UTF-8 are
/// replaced, which only ever makes the affected tokens non-numeric.
pub fn read_numbers<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<NumericSample, IngestError> {
    let text = read_text(path)?;
    parse_numbers(&text, mode)
}

/// Read a whole file as text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, IngestError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| IngestError::file_read(path, e))?;
    log::info!("read {} byte(s) from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
