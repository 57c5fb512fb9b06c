// File: crates/lumen-core/src/plot.rs
// Summary: Series geometry: line paths (straight or smoothed), area fill and rounded bars.

use crate::geometry::{Fill, LinearGradient, Path, Point, RectF};
use crate::scale::{IndexScale, ValueScale};
use crate::series::Series;
use crate::style::ChartStyle;
use crate::types::Argb;

/// Corner radius of every bar, in pixels.
pub const BAR_CORNER_RADIUS: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
}

/// Closed region between the baseline and the primary line.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaFill {
    pub path: Path,
    pub gradient: LinearGradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    pub series_index: usize,
    /// Sampled points with the reference index each one belongs to.
    pub points: Vec<(usize, Point)>,
    pub path: Path,
    pub fill: Option<AreaFill>,
    pub markers: Vec<Marker>,
    pub color: Argb,
    pub stroke_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub rect: RectF,
    pub corner_radius: f32,
    pub fill: Fill,
}

/// Screen points for `series` across the first `count` reference indices.
/// Missing or non-finite values are skipped.
pub fn sample_points(
    series: &Series,
    count: usize,
    xs: &IndexScale,
    ys: &ValueScale,
    progress: f32,
) -> Vec<(usize, Point)> {
    (0..count.min(series.values.len()))
        .filter_map(|i| {
            let v = series.value_at(i)?;
            Some((i, Point::new(xs.to_px(i), ys.to_px(v, progress))))
        })
        .collect()
}

/// Stroke path through `points`.
///
/// Smoothed mode draws a quadratic from each previous sample, used as the control
/// point, to the midpoint between it and the current sample, then closes with a
/// straight segment to the last sample. The curve therefore touches the data only
/// at the first and last sample.
pub fn stroke_path(points: &[Point], smooth: bool) -> Path {
    let mut path = Path::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    append_segments(&mut path, first, rest, smooth);
    path
}

/// Polygon from the baseline up to the stroke and back down.
pub fn area_path(points: &[Point], smooth: bool, baseline: f32) -> Path {
    let mut path = Path::new();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return path;
    };
    path.move_to(Point::new(first.x, baseline));
    path.line_to(first);
    append_segments(&mut path, first, &points[1..], smooth);
    path.line_to(Point::new(last.x, baseline));
    path.close();
    path
}

fn append_segments(path: &mut Path, first: Point, rest: &[Point], smooth: bool) {
    let mut prev = first;
    for &p in rest {
        if smooth {
            path.quad_to(prev, prev.midpoint(p));
        } else {
            path.line_to(p);
        }
        prev = p;
    }
    if smooth && !rest.is_empty() {
        path.line_to(prev);
    }
}

/// Geometry for one line series; `None` when it has no drawable points.
/// `fill` is only passed for the primary series when gradient fill is on.
pub fn build_line(
    series_index: usize,
    series: &Series,
    count: usize,
    xs: &IndexScale,
    ys: &ValueScale,
    progress: f32,
    fill: Option<&[Argb]>,
) -> Option<LineGeometry> {
    let points = sample_points(series, count, xs, ys, progress);
    if points.is_empty() {
        return None;
    }
    let style = &series.style;
    let coords: Vec<Point> = points.iter().map(|&(_, p)| p).collect();

    let fill = fill.map(|stops| AreaFill {
        path: area_path(&coords, style.smooth, ys.baseline()),
        gradient: LinearGradient { y0: ys.top, y1: ys.baseline(), stops: stops.to_vec() },
    });

    let markers = if style.show_points {
        points
            .iter()
            .map(|&(index, center)| Marker { index, center, radius: style.point_radius })
            .collect()
    } else {
        Vec::new()
    };

    Some(LineGeometry {
        series_index,
        path: stroke_path(&coords, style.smooth),
        points,
        fill,
        markers,
        color: style.color,
        stroke_width: style.stroke_width,
    })
}

/// One rounded bar per reference index that has a value. Negative values hang
/// below the baseline.
pub fn build_bars(
    series: &Series,
    count: usize,
    xs: &IndexScale,
    ys: &ValueScale,
    progress: f32,
    style: &ChartStyle,
) -> Vec<BarGeometry> {
    let IndexScale::Slots { bar, .. } = *xs else {
        return Vec::new();
    };
    let baseline = ys.baseline();
    (0..count.min(series.values.len()))
        .filter_map(|i| {
            let v = series.value_at(i)?;
            let left = xs.to_px(i);
            let top = ys.to_px(v, progress);
            let rect = RectF::from_ltrb(left, top, left + bar.width, baseline).normalized();
            let fill = match style.bar_color(i) {
                Some(color) => Fill::Solid(color),
                None if style.bar_gradient.is_empty() => Fill::Solid(series.style.color),
                None => Fill::Gradient(LinearGradient {
                    y0: ys.top,
                    y1: baseline,
                    stops: style.bar_gradient.clone(),
                }),
            };
            Some(BarGeometry { index: i, rect, corner_radius: BAR_CORNER_RADIUS, fill })
        })
        .collect()
}
