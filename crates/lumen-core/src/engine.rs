// File: crates/lumen-core/src/engine.rs
// Summary: Geometry engine: per-frame layout, the geometry snapshot, and the
// animation/selection state owned by one chart instance.
//
// Dataset, viewport and style are passed in on every call; only animation and
// selection state live in the engine, so several charts can share inputs and
// tests can drive any progress value directly.

use crate::animation::{AnimationConfig, AnimationDriver, Animator, Phase};
use crate::axis::{plan_axes, AxisGeometry};
use crate::hit::{first_within, TOUCH_TOLERANCE_X};
use crate::plot::{build_bars, build_line, BarGeometry, LineGeometry};
use crate::scale::{effective_max, IndexScale, ValueScale};
use crate::series::{ChartKind, Dataset};
use crate::style::ChartStyle;
use crate::tooltip::{layout_tooltip, TooltipBox};
use crate::types::Viewport;

/// Everything a frame is computed from, borrowed for the duration of the call.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub dataset: &'a Dataset,
    pub viewport: &'a Viewport,
    pub style: &'a ChartStyle,
}

/// Coordinate transforms resolved for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub kind: ChartKind,
    /// Length of the reference index axis.
    pub count: usize,
    pub xs: IndexScale,
    pub ys: ValueScale,
}

impl Layout {
    /// `None` when the dataset is too short or the viewport has no plot area.
    pub fn resolve(input: &FrameInput<'_>) -> Option<Self> {
        let FrameInput { dataset, viewport, style } = *input;
        if !dataset.is_drawable() || !viewport.has_plot_area() {
            return None;
        }
        let count = dataset.reference_len();
        Some(Self {
            kind: dataset.kind,
            count,
            xs: IndexScale::for_chart(dataset.kind, viewport, count, style),
            ys: ValueScale::new(viewport, effective_max(dataset.max_value())),
        })
    }

    pub fn anchors(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.count).map(|i| self.xs.anchor_px(i))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Plot {
    Lines(Vec<LineGeometry>),
    Bars(Vec<BarGeometry>),
}

impl Plot {
    pub fn is_empty(&self) -> bool {
        match self {
            Plot::Lines(v) => v.is_empty(),
            Plot::Bars(v) => v.is_empty(),
        }
    }
}

/// Drawable snapshot of one frame; the backend's only input.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub plot: Plot,
    pub axes: Option<AxisGeometry>,
    pub tooltip: Option<TooltipBox>,
    pub progress: f32,
    /// Backend-applied opacity; below 1.0 only during a `Fade` reveal.
    pub opacity: f32,
}

impl Geometry {
    pub fn empty() -> Self {
        Self { plot: Plot::Lines(Vec::new()), axes: None, tooltip: None, progress: 0.0, opacity: 1.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.plot.is_empty() && self.axes.is_none() && self.tooltip.is_none()
    }

    pub fn lines(&self) -> &[LineGeometry] {
        match &self.plot {
            Plot::Lines(v) => v,
            Plot::Bars(_) => &[],
        }
    }

    pub fn bars(&self) -> &[BarGeometry] {
        match &self.plot {
            Plot::Bars(v) => v,
            Plot::Lines(_) => &[],
        }
    }
}

/// Pure geometry for `input` at `progress`, with a tooltip for `selection`.
pub fn compute_geometry(input: &FrameInput<'_>, progress: f32, selection: Option<usize>) -> Geometry {
    let Some(layout) = Layout::resolve(input) else {
        return Geometry::empty();
    };
    let FrameInput { dataset, viewport, style } = *input;
    let Layout { kind, count, xs, ys } = layout;

    let plot = match kind {
        ChartKind::Line => Plot::Lines(
            dataset
                .series
                .iter()
                .enumerate()
                .filter_map(|(i, s)| {
                    let fill = (i == 0 && style.show_gradient).then_some(style.fill_gradient.as_slice());
                    build_line(i, s, count, &xs, &ys, progress, fill)
                })
                .collect(),
        ),
        ChartKind::Bar => Plot::Bars(
            dataset
                .reference()
                .map(|s| build_bars(s, count, &xs, &ys, progress, style))
                .unwrap_or_default(),
        ),
    };

    let axes = style
        .show_axis
        .then(|| plan_axes(kind, count, &xs, &ys, &dataset.x_labels, viewport, style));

    let tooltip = selection
        .filter(|&i| i < count)
        .map(|i| layout_tooltip(i, xs.anchor_px(i), dataset, viewport, &style.palette));

    Geometry { plot, axes, tooltip, progress, opacity: 1.0 }
}

/// Index under `pointer_x`, if any.
pub fn hit_test(input: &FrameInput<'_>, pointer_x: f32) -> Option<usize> {
    let layout = Layout::resolve(input)?;
    let hit = first_within(pointer_x, layout.anchors(), TOUCH_TOLERANCE_X);
    tracing::trace!(pointer_x, ?hit, "hit test");
    hit
}

/// Details reported for a pointer-down that landed on an index.
#[derive(Clone, Debug, PartialEq)]
pub struct PointPick {
    pub index: usize,
    /// X label at `index`, empty when none was supplied.
    pub label: String,
    /// Reference series value at `index`.
    pub value: f64,
}

/// Animation and selection state for one chart instance.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    animator: Animator,
    selection: Option<usize>,
}

impl Engine {
    pub fn new(config: AnimationConfig) -> Self {
        Self { animator: Animator::new(config), selection: None }
    }

    pub fn animator(&self) -> &Animator { &self.animator }
    pub fn phase(&self) -> Phase { self.animator.phase() }
    pub fn progress(&self) -> f32 { self.animator.progress() }
    pub fn selection(&self) -> Option<usize> { self.selection }

    pub fn set_animation(&mut self, config: AnimationConfig) {
        self.animator.set_config(config);
    }

    /// Re-arm on every dataset replacement. Any in-flight animation is dropped.
    pub fn dataset_replaced(&mut self, dataset: &Dataset) {
        tracing::debug!(
            series = dataset.series.len(),
            reference_len = dataset.reference_len(),
            kind = ?dataset.kind,
            "dataset replaced"
        );
        self.animator.arm();
    }

    pub fn set_selection(&mut self, index: Option<usize>) {
        self.selection = index;
    }

    /// Push the driver's elapsed fraction; returns the eased progress.
    pub fn advance_animation(&mut self, fraction: f32) -> f32 {
        self.animator.advance(fraction)
    }

    /// Snapshot at the current progress. Does not touch animation state.
    pub fn compute(&self, input: &FrameInput<'_>) -> Geometry {
        let mut geometry = compute_geometry(input, self.animator.progress(), self.selection);
        geometry.opacity = self.animator.opacity();
        tracing::trace!(
            progress = geometry.progress,
            lines = geometry.lines().len(),
            bars = geometry.bars().len(),
            tooltip = geometry.tooltip.is_some(),
            "frame computed"
        );
        geometry
    }

    /// Draw request: hands an armed animation to `driver` (or settles it) and
    /// returns the current snapshot. Undrawable inputs leave the animation armed.
    pub fn draw(&mut self, input: &FrameInput<'_>, driver: &mut dyn AnimationDriver) -> Geometry {
        if Layout::resolve(input).is_none() {
            return Geometry::empty();
        }
        self.animator.on_draw(driver);
        self.compute(input)
    }

    /// Pointer-down: select the hit index, or clear the selection on a miss.
    pub fn pointer_down(&mut self, input: &FrameInput<'_>, pointer_x: f32) -> Option<PointPick> {
        let hit = hit_test(input, pointer_x);
        self.selection = hit;
        let index = hit?;
        let dataset = input.dataset;
        Some(PointPick {
            index,
            label: dataset.x_label(index).unwrap_or_default().to_string(),
            value: dataset.reference().and_then(|s| s.values.get(index).copied()).unwrap_or(f64::NAN),
        })
    }
}
