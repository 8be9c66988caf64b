//! Utility functions for visualization: locale mapping, number formatting, axis ticks.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a value for display: locale thousands separators and the shortest
/// decimal digits that round-trip, so no precision is hidden.
/// `4.0` -> `"4"`, `1234.5` (de) -> `"1.234,5"`, `0.00001` -> `"0.00001"`.
///
/// Magnitudes of `1e18` and above, or below `1e-6`, use scientific notation.
pub fn format_value(v: f64, locale_tag: &str) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let abs = v.abs();
    if abs >= 1.0e18 || (abs != 0.0 && abs < 1.0e-6) {
        return format!("{v:e}").replace('.', &dec_sep.to_string());
    }
    let plain = abs.to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let int_value: u64 = int_part.parse().unwrap_or(0);

    let mut out = String::new();
    if v < 0.0 {
        out.push('-');
    }
    out.push_str(&int_value.to_formatted_string(locale));
    if !frac_part.is_empty() {
        out.push(dec_sep);
        out.push_str(frac_part);
    }
    out
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Round tick values covering `[min, max]`, stepping by 1, 2 or 5 times a power of ten.
/// Roughly `count` intervals; a degenerate range yields the single value.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    if max == min {
        return vec![min];
    }
    let raw = (max - min) / count as f64;
    let exp = raw.log10().floor() as i32;
    let mag = 10f64.powi(exp);
    let norm = raw / mag;
    let nice = if norm <= 1.0 + 1e-9 {
        1.0
    } else if norm <= 2.0 + 1e-9 {
        2.0
    } else if norm <= 5.0 + 1e-9 {
        5.0
    } else {
        10.0
    };
    let step = nice * mag;

    // Nudge by a hair so float noise in `step` cannot drop an end tick.
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    if last < first || last - first > 4 * count as i64 {
        return vec![min, max];
    }
    // Dividing by an exact power of ten keeps small ticks on their decimal value.
    (first..=last)
        .map(|i| {
            let units = i as f64 * nice;
            if exp < 0 {
                units / 10f64.powi(-exp)
            } else {
                units * mag
            }
        })
        .collect()
}
