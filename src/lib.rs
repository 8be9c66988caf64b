//! fivenum_rs
//!
//! A small Rust library for loading numeric CSV data, computing its
//! five-number summary, and drawing a box plot. Pairs with the `fivenum` CLI
//! and the `fivenum-gui` desktop app.
//!
//! ### Features
//! - Lenient (or strict) extraction of every number in a CSV file
//! - Five-number summary with exclusive-median quartiles
//! - Backend-independent box-plot scene with hover hit-testing
//! - SVG/PNG rendering with light and dark themes
//!
//! ### Example
//! ```no_run
//! use fivenum_rs::{ingest, summary, viz};
//! use fivenum_rs::{ChartConfig, ParseMode, Theme};
//!
//! let sample = ingest::read_numbers("values.csv", ParseMode::Lenient)?;
//! let s = summary::five_number_summary(sample)?;
//! println!("{:#?}", s);
//! viz::render_to_file(&s, "values.svg", Theme::Light, &ChartConfig::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod error;
pub mod ingest;
pub mod models;
pub mod style;
pub mod summary;
pub mod viz;
pub mod viz_plotters_adapter;

pub use app::{AppEvent, AppState};
pub use error::{Error, IngestError, Result};
pub use ingest::ParseMode;
pub use models::{Dataset, NumericSample, Theme};
pub use summary::{FiveNumberSummary, SummaryError};
pub use viz::{ChartConfig, TickSet};
