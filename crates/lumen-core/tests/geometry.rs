// File: crates/lumen-core/tests/geometry.rs
// Purpose: End-to-end geometry for line and bar charts, including degraded inputs.

use lumen_core::plot::{area_path, stroke_path, BAR_CORNER_RADIUS};
use lumen_core::{
    compute_geometry, Argb, ChartStyle, Dataset, Fill, FrameInput, Insets, PathCommand, Point, Series, SeriesStyle,
    Viewport,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn line_viewport() -> Viewport {
    Viewport::new(400.0, 200.0, Insets::default())
}

#[test]
fn three_point_line_end_to_end() {
    let dataset = Dataset::line(vec![Series::new(vec![10.0, 20.0, 5.0])]);
    let vp = line_viewport();
    let style = ChartStyle::default();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);

    let lines = g.lines();
    assert_eq!(lines.len(), 1);
    let pts: Vec<Point> = lines[0].points.iter().map(|&(_, p)| p).collect();
    // usable 280 x 100, step 140, max 20
    let expect = [(80.0, 90.0), (220.0, 40.0), (360.0, 115.0)];
    assert_eq!(pts.len(), 3);
    for (p, (x, y)) in pts.iter().zip(expect) {
        assert!(approx(p.x, x) && approx(p.y, y), "got {p:?}, want ({x}, {y})");
    }
    // straight path: move + two lines through the samples
    assert_eq!(
        lines[0].path.commands,
        vec![
            PathCommand::MoveTo(pts[0]),
            PathCommand::LineTo(pts[1]),
            PathCommand::LineTo(pts[2]),
        ]
    );
    assert!(lines[0].fill.is_none());
    assert!(lines[0].markers.is_empty());
    assert!(g.axes.is_some());
    assert!(g.tooltip.is_none());
}

#[test]
fn smoothed_path_draws_to_midpoints_then_last_sample() {
    let pts = [Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)];
    let path = stroke_path(&pts, true);
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(pts[0]),
            PathCommand::QuadTo { ctrl: pts[0], to: Point::new(5.0, 5.0) },
            PathCommand::QuadTo { ctrl: pts[1], to: Point::new(15.0, 5.0) },
            PathCommand::LineTo(pts[2]),
        ]
    );
    // Interior samples are not on the curve's endpoints.
    assert!(!path.vertices().any(|v| v == pts[1]));
}

#[test]
fn area_fill_closes_against_baseline() {
    let pts = [Point::new(0.0, 10.0), Point::new(10.0, 0.0)];
    let path = area_path(&pts, false, 50.0);
    assert_eq!(
        path.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 50.0)),
            PathCommand::LineTo(pts[0]),
            PathCommand::LineTo(pts[1]),
            PathCommand::LineTo(Point::new(10.0, 50.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn gradient_fill_only_on_primary_series() {
    let dataset = Dataset::line(vec![Series::new(vec![1.0, 2.0, 3.0]), Series::new(vec![3.0, 2.0, 1.0])]);
    let vp = line_viewport();
    let style = ChartStyle { show_gradient: true, ..ChartStyle::default() };
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    let lines = g.lines();
    let fill = lines[0].fill.as_ref().expect("primary fill");
    assert_eq!(fill.gradient.stops, vec![Argb::BLUE, Argb::TRANSPARENT]);
    assert_eq!(fill.gradient.y0, 40.0);
    assert_eq!(fill.gradient.y1, 140.0);
    assert!(lines[1].fill.is_none());
}

#[test]
fn markers_follow_series_style() {
    let style = SeriesStyle { show_points: true, point_radius: 9.0, color: Argb(0xFFFF_0000), ..SeriesStyle::default() };
    let dataset = Dataset::line(vec![Series::styled(vec![1.0, 2.0], style)]);
    let vp = line_viewport();
    let cs = ChartStyle::default();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &cs }, 1.0, None);
    let line = &g.lines()[0];
    assert_eq!(line.markers.len(), 2);
    assert!(line.markers.iter().all(|m| m.radius == 9.0));
    assert_eq!(line.color, Argb(0xFFFF_0000));
    assert_eq!(line.markers[1].center, line.points[1].1);
}

#[test]
fn short_and_long_series_align_to_reference() {
    let dataset = Dataset::line(vec![
        Series::new(vec![1.0, 2.0, 3.0, 4.0]),
        Series::new(vec![5.0, 6.0]),
        Series::new(vec![1.0, 1.0, 1.0, 1.0, 100.0, 100.0]),
    ]);
    let vp = line_viewport();
    let style = ChartStyle::default();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    let lines = g.lines();
    assert_eq!(lines[1].points.len(), 2);
    assert_eq!(lines[2].points.len(), 4);
    // values beyond the reference domain do not raise the max
    assert!(approx(lines[1].points[1].1.y, 40.0 + 100.0 * (1.0 - 6.0 / 6.0)));
}

#[test]
fn non_finite_values_are_skipped() {
    let dataset = Dataset::line(vec![Series::new(vec![1.0, f64::NAN, 3.0])]);
    let vp = line_viewport();
    let style = ChartStyle::default();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    let idx: Vec<usize> = g.lines()[0].points.iter().map(|&(i, _)| i).collect();
    assert_eq!(idx, vec![0, 2]);
}

#[test]
fn all_zero_values_render_at_baseline() {
    let dataset = Dataset::line(vec![Series::new(vec![0.0, 0.0, 0.0])]);
    let vp = line_viewport();
    let style = ChartStyle::default();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    assert!(g.lines()[0].points.iter().all(|&(_, p)| p.y == vp.baseline()));
}

#[test]
fn degraded_inputs_produce_empty_geometry() {
    let style = ChartStyle::default();
    let vp = line_viewport();

    let empty = Dataset::line(Vec::new());
    assert!(compute_geometry(&FrameInput { dataset: &empty, viewport: &vp, style: &style }, 1.0, None).is_empty());

    let single = Dataset::line(vec![Series::new(vec![4.0])]);
    assert!(compute_geometry(&FrameInput { dataset: &single, viewport: &vp, style: &style }, 1.0, None).is_empty());

    let ok = Dataset::line(vec![Series::new(vec![4.0, 5.0])]);
    let cramped = Viewport::new(120.0, 200.0, Insets::default());
    assert!(compute_geometry(&FrameInput { dataset: &ok, viewport: &cramped, style: &style }, 1.0, Some(0)).is_empty());

    let no_bars = Dataset::bars(Vec::new());
    let bar_style = ChartStyle::bars();
    assert!(compute_geometry(&FrameInput { dataset: &no_bars, viewport: &vp, style: &bar_style }, 1.0, None).is_empty());
}

#[test]
fn bars_use_explicit_colors_then_gradient() {
    let dataset = Dataset::bars(vec![10.0, 5.0, 2.5]).with_x_labels(["a", "b", "c"]);
    let vp = Viewport::new(440.0, 320.0, Insets::bar_default());
    let style = ChartStyle { bar_colors: vec![Argb(0xFF11_2233)], ..ChartStyle::bars() };
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    let bars = g.bars();
    assert_eq!(bars.len(), 3);
    assert!(bars.iter().all(|b| b.corner_radius == BAR_CORNER_RADIUS));
    assert_eq!(bars[0].fill, Fill::Solid(Argb(0xFF11_2233)));
    match &bars[1].fill {
        Fill::Gradient(g) => assert_eq!(g.stops, vec![Argb(0xFF3B_82F6), Argb(0xFF60_A5FA)]),
        other => panic!("expected gradient, got {other:?}"),
    }
    // usable 320 x 200; bar width 320 / 4.5
    let width = 320.0 / 4.5;
    assert!(approx(bars[0].rect.left, 100.0));
    assert!(approx(bars[0].rect.width(), width));
    assert!(approx(bars[0].rect.top, 40.0));
    assert!(approx(bars[0].rect.bottom, 240.0));
    assert!(approx(bars[1].rect.top, 140.0));
    assert!(approx(bars[1].rect.left, 100.0 + width * 1.5));
}

#[test]
fn negative_bars_hang_below_baseline() {
    let dataset = Dataset::bars(vec![4.0, -2.0]);
    let vp = Viewport::new(440.0, 320.0, Insets::bar_default());
    let style = ChartStyle::bars();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    let neg = &g.bars()[1];
    assert!(approx(neg.rect.top, vp.baseline()));
    assert!(neg.rect.bottom > vp.baseline());
}

#[test]
fn bar_chart_draws_reference_series_only() {
    let mut dataset = Dataset::bars(vec![1.0, 2.0]);
    dataset.series.push(Series::new(vec![50.0, 50.0]));
    let vp = Viewport::new(440.0, 320.0, Insets::bar_default());
    let style = ChartStyle::bars();
    let g = compute_geometry(&FrameInput { dataset: &dataset, viewport: &vp, style: &style }, 1.0, None);
    assert_eq!(g.bars().len(), 2);
    // max comes from the drawn series
    assert!(approx(g.bars()[1].rect.top, 40.0));
}
