// File: crates/lumen-core/src/axis.rs
// Summary: Axis lines plus X/Y tick planning with auto or explicit Y labels.

use crate::geometry::{LineSegment, Point, TextAlign, TextLabel};
use crate::scale::{IndexScale, ValueScale};
use crate::series::ChartKind;
use crate::style::{ChartStyle, YLabels};
use crate::types::{Argb, Viewport};

/// Distance of X label baselines from the bottom edge of the canvas.
const X_LABEL_BOTTOM_OFFSET: f32 = 20.0;
const X_LABEL_SIZE: f32 = 28.0;

/// Per-kind placement of Y labels and axis strokes.
#[derive(Clone, Copy, Debug)]
struct AxisMetrics {
    y_label_gap: f32,
    y_label_size: f32,
    y_label_drop: f32,
    stroke_width: f32,
}

impl AxisMetrics {
    fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Self { y_label_gap: 12.0, y_label_size: 28.0, y_label_drop: 14.0, stroke_width: 2.0 },
            ChartKind::Bar => Self { y_label_gap: 10.0, y_label_size: 26.0, y_label_drop: 10.0, stroke_width: 3.0 },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct XTick {
    pub index: usize,
    pub x: f32,
    /// Present only where the caller supplied a label for this index.
    pub label: Option<TextLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub y: f32,
    /// Numeric value in auto mode; `None` for explicit labels.
    pub value: Option<f64>,
    pub label: TextLabel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    pub x_axis: LineSegment,
    pub y_axis: LineSegment,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
}

/// One tick per reference index; labels past the end of `labels` are left blank.
pub fn plan_x_ticks(
    count: usize,
    xs: &IndexScale,
    labels: &[String],
    viewport: &Viewport,
    color: Argb,
) -> Vec<XTick> {
    let y = viewport.height - X_LABEL_BOTTOM_OFFSET;
    (0..count)
        .map(|index| {
            let x = xs.anchor_px(index);
            let label = labels.get(index).map(|text| TextLabel {
                text: text.clone(),
                anchor: Point::new(x, y),
                align: TextAlign::Center,
                size: X_LABEL_SIZE,
                color,
                bold: false,
            });
            XTick { index, x, label }
        })
        .collect()
}

/// Auto mode: `n` values from `max` at the top down to 0 at the baseline.
/// Explicit mode: labels from the baseline upward, evenly spaced.
pub fn plan_y_ticks(
    kind: ChartKind,
    y_labels: &YLabels,
    max: f64,
    ys: &ValueScale,
    viewport: &Viewport,
    color: Argb,
) -> Vec<YTick> {
    let m = AxisMetrics::for_kind(kind);
    let x = viewport.insets.left - m.y_label_gap;
    let label = |text: String, y: f32| TextLabel {
        text,
        anchor: Point::new(x, y + m.y_label_drop),
        align: TextAlign::Right,
        size: m.y_label_size,
        color,
        bold: false,
    };

    match y_labels {
        YLabels::Explicit(texts) if texts.len() >= 2 => {
            let step = ys.height / (texts.len() - 1) as f32;
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let y = ys.baseline() - i as f32 * step;
                    YTick { y, value: None, label: label(text.clone(), y) }
                })
                .collect()
        }
        YLabels::Count(n) if *n >= 2 => auto_ticks(*n, max, ys, label),
        // Setters reject short configurations; fall back to the default count.
        _ => auto_ticks(5, max, ys, label),
    }
}

fn auto_ticks(n: usize, max: f64, ys: &ValueScale, label: impl Fn(String, f32) -> TextLabel) -> Vec<YTick> {
    (0..n)
        .map(|i| {
            let fraction = i as f32 / (n - 1) as f32;
            let value = max * (1.0 - fraction as f64);
            let y = ys.top + ys.height * fraction;
            YTick { y, value: Some(value), label: label(format!("{value:.0}"), y) }
        })
        .collect()
}

/// Both axis lines and all ticks for the current frame.
pub fn plan_axes(
    kind: ChartKind,
    count: usize,
    xs: &IndexScale,
    ys: &ValueScale,
    x_labels: &[String],
    viewport: &Viewport,
    style: &ChartStyle,
) -> AxisGeometry {
    let m = AxisMetrics::for_kind(kind);
    let baseline = ys.baseline();
    let color = style.palette.axis_line;
    let y_label_color = match kind {
        ChartKind::Line => style.palette.axis_label,
        ChartKind::Bar => style.palette.value_label,
    };
    AxisGeometry {
        x_axis: LineSegment {
            from: Point::new(xs.axis_start_px(), baseline),
            to: Point::new(viewport.width - viewport.insets.right, baseline),
            color,
            stroke_width: m.stroke_width,
        },
        y_axis: LineSegment {
            from: Point::new(viewport.insets.left, ys.top),
            to: Point::new(viewport.insets.left, baseline),
            color,
            stroke_width: m.stroke_width,
        },
        x_ticks: plan_x_ticks(count, xs, x_labels, viewport, style.palette.axis_label),
        y_ticks: plan_y_ticks(kind, style.y_labels(), ys.max, ys, viewport, y_label_color),
    }
}
