// File: crates/lumen-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for line and bar charts.

use lumen_core::{
    AnimationConfig, AnimationKind, Chart, ChartStyle, Dataset, Insets, ManualDriver, Series, SeriesStyle, Viewport,
};
use lumen_render_skia::{RenderOptions, SkiaRenderer};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn line_chart() -> Chart {
    let mut chart = Chart::new(Viewport::new(640.0, 400.0, Insets::line_default()))
        .with_style(ChartStyle { show_gradient: true, ..ChartStyle::default() });
    let style = SeriesStyle { show_points: true, smooth: true, ..SeriesStyle::default() };
    chart.set_dataset(
        Dataset::line(vec![
            Series::titled(vec![3.0, 8.0, 5.0, 12.0, 9.0], style, "Visits"),
            Series::new(vec![1.0, 2.0, 4.0]),
        ])
        .with_x_labels(["Mon", "Tue", "Wed", "Thu", "Fri"]),
    );
    chart
}

#[test]
fn render_line_chart_png() {
    let mut chart = line_chart();
    chart.set_selection(Some(3));
    let geometry = chart.draw(&mut ManualDriver::new());

    let renderer = SkiaRenderer::default();
    let out = std::path::PathBuf::from("target/test_out/line_smoke.png");
    renderer.render_to_png(&geometry, chart.viewport(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&geometry, chart.viewport()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn render_bar_chart_and_mid_fade() {
    let mut chart = Chart::new(Viewport::new(480.0, 360.0, Insets::bar_default()))
        .with_style(ChartStyle::bars())
        .with_animation(AnimationConfig { kind: AnimationKind::Fade, ..AnimationConfig::default() });
    chart.set_dataset(Dataset::bars(vec![4.0, 9.0, 2.0, 7.0]).with_x_labels(["Q1", "Q2", "Q3", "Q4"]));
    chart.draw(&mut ManualDriver::new());
    let geometry = chart.advance_animation(0.5);
    assert!(geometry.opacity < 1.0);

    let renderer = SkiaRenderer::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let bytes = renderer.render_to_png_bytes(&geometry, chart.viewport()).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn empty_geometry_renders_background_only() {
    let chart = Chart::new(Viewport::new(64.0, 48.0, Insets::line_default()));
    let geometry = chart.compute_geometry();
    assert!(geometry.is_empty());
    let bytes = SkiaRenderer::default()
        .render_to_png_bytes(&geometry, chart.viewport())
        .expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (64, 48));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn zero_sized_viewport_is_an_error() {
    let chart = Chart::new(Viewport::new(0.0, 48.0, Insets::line_default()));
    assert!(SkiaRenderer::default().render_to_png_bytes(&chart.compute_geometry(), chart.viewport()).is_err());
}
