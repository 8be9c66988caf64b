use fivenum_rs::summary::five_number_summary;
use fivenum_rs::viz::{self, ChartConfig, TickSet};
use fivenum_rs::{FiveNumberSummary, Theme};
use std::fs;
use std::path::PathBuf;

fn sample_summary() -> FiveNumberSummary {
    five_number_summary(vec![7.0, 1.0, 5.0, 3.0]).unwrap()
}

fn count_elements(svg: &str) -> usize {
    ["<polyline", "<line", "<rect", "<text"]
        .iter()
        .map(|tag| svg.matches(tag).count())
        .sum()
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(name);
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "{name} has content");
}

#[test]
fn svg_and_png_files_are_written() {
    let s = sample_summary();
    for (theme, name) in [(Theme::Light, "light.svg"), (Theme::Dark, "dark.svg"), (Theme::Light, "plot.png")] {
        write_and_check(
            |p| viz::render_to_file(&s, p, theme, &ChartConfig::default()).unwrap(),
            name,
        );
    }
}

#[test]
fn redraws_do_not_accumulate_elements() {
    let s = sample_summary();
    let config = ChartConfig::default();
    let mut theme = Theme::Light;
    let first = count_elements(&viz::render_svg_string(&s, theme, &config).unwrap());
    assert!(first > 0);
    for _ in 0..4 {
        theme = theme.toggled();
        let svg = viz::render_svg_string(&s, theme, &config).unwrap();
        assert_eq!(count_elements(&svg), first);
    }
}

#[test]
fn stroke_and_fill_colours() {
    let s = sample_summary();
    let config = ChartConfig::default();
    let light = viz::render_svg_string(&s, Theme::Light, &config).unwrap().to_lowercase();
    let dark = viz::render_svg_string(&s, Theme::Dark, &config).unwrap().to_lowercase();
    assert!(light.contains("#4f46e5"));
    assert!(light.contains("#000000"));
    assert!(dark.contains("#ffffff"));
}

#[test]
fn three_ticks_draw_fewer_elements() {
    let s = sample_summary();
    let five = ChartConfig::default();
    let three = ChartConfig {
        tick_set: TickSet::Three,
        ..ChartConfig::default()
    };
    let n5 = count_elements(&viz::render_svg_string(&s, Theme::Light, &five).unwrap());
    let n3 = count_elements(&viz::render_svg_string(&s, Theme::Light, &three).unwrap());
    assert_eq!(n5 - n3, 2);
}

#[test]
fn axis_labels_appear_in_svg() {
    let s = sample_summary();
    let config = ChartConfig {
        show_axis: true,
        ..ChartConfig::default()
    };
    let svg = viz::render_svg_string(&s, Theme::Light, &config).unwrap();
    assert!(svg.contains("<text"));
    let plain = viz::render_svg_string(&s, Theme::Light, &ChartConfig::default()).unwrap();
    assert!(!plain.contains("<text"));
}

#[test]
fn single_value_renders_centered() {
    let s = five_number_summary(vec![3.0]).unwrap();
    let scene = viz::build_scene(&s, Theme::Light, &ChartConfig::default());
    assert_eq!(scene.len(), 7);
    let tip = scene.tooltip_at((300.0, 100.0)).unwrap();
    assert!(tip.text.ends_with(": 3"));
}

#[test]
fn tiny_values_spread_across_the_chart() {
    let s = five_number_summary(vec![3e-17, 1e-17, 5e-17, 2e-17, 4e-17]).unwrap();
    let scene = viz::build_scene(&s, Theme::Light, &ChartConfig::default());
    let median = scene.tooltip_at((300.0, 100.0)).unwrap();
    assert!(median.text.starts_with("Median: 3"), "{}", median.text);
    let max = scene.tooltip_at((570.0, 100.0)).unwrap();
    assert_eq!(max.text, "Max: 5e-17");

    let config = ChartConfig {
        show_axis: true,
        ..ChartConfig::default()
    };
    let svg = viz::render_svg_string(&s, Theme::Light, &config).unwrap();
    assert!(svg.contains("e-17"));
}

#[test]
fn micro_values_show_in_tooltips() {
    let s = five_number_summary(vec![0.000004, 0.000001, 0.000003, 0.000002]).unwrap();
    let scene = viz::build_scene(&s, Theme::Light, &ChartConfig::default());
    assert_eq!(scene.tooltip_at((30.0, 100.0)).unwrap().text, "Min: 0.000001");
    assert_eq!(scene.tooltip_at((570.0, 100.0)).unwrap().text, "Max: 0.000004");
}

#[test]
fn zero_sized_chart_is_error() {
    let s = sample_summary();
    let config = ChartConfig {
        width: 0,
        ..ChartConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    assert!(viz::render_to_file(&s, dir.path().join("x.svg"), Theme::Light, &config).is_err());
}
