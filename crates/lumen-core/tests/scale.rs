// File: crates/lumen-core/tests/scale.rs
// Purpose: Validate index/value mapping, effective max flooring and bar sizing.

use lumen_core::scale::{BAR_AXIS_GAP, EFFECTIVE_MAX_FLOOR};
use lumen_core::{
    content_width, dp_to_px, effective_max, map_x, map_y, BarLayout, ChartKind, ChartStyle, IndexScale, Insets,
    ValueScale, Viewport,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn value_extremes_map_to_plot_edges() {
    let (top, h, max) = (40.0, 100.0, 20.0);
    assert_eq!(map_y(0.0, max, top, h, 1.0), top + h);
    assert_eq!(map_y(max, max, top, h, 1.0), top);
}

#[test]
fn value_mapping_is_monotonic_for_any_progress() {
    let values = [-3.0, 0.0, 0.5, 1.0, 7.25, 19.9, 20.0];
    for &p in &[0.0f32, 0.1, 0.5, 0.99, 1.0, 1.08] {
        for pair in values.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert!(
                map_y(lo, 20.0, 40.0, 100.0, p) >= map_y(hi, 20.0, 40.0, 100.0, p),
                "mapY({lo}) < mapY({hi}) at progress {p}"
            );
        }
    }
}

#[test]
fn progress_zero_pins_everything_to_baseline() {
    for v in [0.0, 3.0, 20.0] {
        assert_eq!(map_y(v, 20.0, 40.0, 100.0, 0.0), 140.0);
    }
}

#[test]
fn effective_max_floors_at_one() {
    assert_eq!(effective_max(None), EFFECTIVE_MAX_FLOOR);
    assert_eq!(effective_max(Some(0.0)), 1.0);
    assert_eq!(effective_max(Some(-4.0)), 1.0);
    assert_eq!(effective_max(Some(0.4)), 1.0);
    assert_eq!(effective_max(Some(20.0)), 20.0);
}

#[test]
fn line_points_span_usable_width() {
    assert_eq!(map_x(0, 80.0, 280.0, 3), 80.0);
    assert_eq!(map_x(1, 80.0, 280.0, 3), 220.0);
    assert_eq!(map_x(2, 80.0, 280.0, 3), 360.0);
    // A single point has no step and sits on the left inset.
    assert_eq!(map_x(0, 80.0, 280.0, 1), 80.0);
}

#[test]
fn derived_bar_layout() {
    let style = ChartStyle::bars();
    let layout = BarLayout::resolve(&style, 300.0, 4);
    assert!(approx(layout.width, 50.0));
    assert!(approx(layout.spacing, 25.0));
}

#[test]
fn bar_overrides_bypass_formula() {
    let style = ChartStyle { bar_width: Some(12.0), ..ChartStyle::bars() };
    let layout = BarLayout::resolve(&style, 300.0, 4);
    assert_eq!(layout.width, 12.0);
    assert_eq!(layout.spacing, 6.0);

    let style = ChartStyle { bar_width: Some(12.0), bar_spacing: Some(30.0), ..ChartStyle::bars() };
    let layout = BarLayout::resolve(&style, 300.0, 4);
    assert_eq!(layout.spacing, 30.0);
}

#[test]
fn bar_slots_start_after_axis_gap() {
    let vp = Viewport::new(420.0, 300.0, Insets::bar_default());
    let style = ChartStyle::bars();
    let xs = IndexScale::for_chart(ChartKind::Bar, &vp, 4, &style);
    // usable width 300 -> bar 50, spacing 25
    assert!(approx(xs.to_px(0), 80.0 + BAR_AXIS_GAP));
    assert!(approx(xs.to_px(1), 80.0 + BAR_AXIS_GAP + 75.0));
    assert!(approx(xs.anchor_px(1), 80.0 + BAR_AXIS_GAP + 75.0 + 25.0));
    assert!(approx(xs.axis_start_px(), 100.0));
}

#[test]
fn value_scale_baseline_matches_viewport() {
    let vp = Viewport::new(400.0, 200.0, Insets::default());
    let ys = ValueScale::new(&vp, 20.0);
    assert_eq!(ys.baseline(), vp.baseline());
    assert_eq!(ys.to_px(0.0, 1.0), vp.baseline());
}

#[test]
fn viewport_without_plot_area() {
    assert!(!Viewport::new(100.0, 200.0, Insets::default()).has_plot_area());
    assert!(!Viewport::new(400.0, 100.0, Insets::default()).has_plot_area());
    assert!(Viewport::new(400.0, 200.0, Insets::default()).has_plot_area());
}

#[test]
fn content_width_uses_defaults_or_overrides() {
    let style = ChartStyle::bars();
    assert_eq!(content_width(0, &style), 0.0);
    assert_eq!(content_width(5, &style), 700.0);
    let style = ChartStyle { bar_width: Some(dp_to_px(20.0, 2.0)), bar_spacing: Some(10.0), ..ChartStyle::bars() };
    assert_eq!(content_width(3, &style), 250.0);
}
