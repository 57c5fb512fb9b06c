// File: crates/lumen-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms from data space to pixels.

use crate::series::ChartKind;
use crate::style::ChartStyle;
use crate::types::Viewport;

/// Gap between the Y axis and the first bar slot, in pixels.
pub const BAR_AXIS_GAP: f32 = 20.0;
/// Lower bound of the effective max; keeps an all-zero dataset from dividing by zero.
pub const EFFECTIVE_MAX_FLOOR: f64 = 1.0;

const CONTENT_BAR_WIDTH: f32 = 80.0;
const CONTENT_BAR_SPACING: f32 = 40.0;
const CONTENT_MARGIN: f32 = 100.0;

/// Normalization ceiling for Y mapping.
#[inline]
pub fn effective_max(max_value: Option<f64>) -> f64 {
    max_value.map_or(EFFECTIVE_MAX_FLOOR, |m| m.max(EFFECTIVE_MAX_FLOOR))
}

/// X pixel of point `index` when `count` points span `usable_width` starting at `left`.
#[inline]
pub fn map_x(index: usize, left: f32, usable_width: f32, count: usize) -> f32 {
    let step = if count > 1 { usable_width / (count - 1) as f32 } else { 0.0 };
    left + index as f32 * step
}

/// Y pixel of `value`. `progress` scales the reveal; the baseline
/// (`top + usable_height`) is fixed for every progress.
#[inline]
pub fn map_y(value: f64, max: f64, top: f32, usable_height: f32, progress: f32) -> f32 {
    let ratio = (value / max) as f32;
    top + usable_height * (1.0 - ratio * progress)
}

/// Resolved bar sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub width: f32,
    pub spacing: f32,
}

impl BarLayout {
    /// Overrides are absolute and bypass the derived formula entirely.
    pub fn resolve(style: &ChartStyle, usable_width: f32, count: usize) -> Self {
        let width = style
            .bar_width
            .unwrap_or_else(|| usable_width / (count.max(1) as f32 * 1.5));
        let spacing = style.bar_spacing.unwrap_or(width * 0.5);
        Self { width, spacing }
    }
}

/// Canvas width that fits `count` bars without squeezing, for hosts that scroll.
pub fn content_width(count: usize, style: &ChartStyle) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let width = style.bar_width.unwrap_or(CONTENT_BAR_WIDTH);
    let spacing = style.bar_spacing.unwrap_or(CONTENT_BAR_SPACING);
    ((width + spacing) * count as f32 + CONTENT_MARGIN).round()
}

/// Horizontal mapping for the reference index axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndexScale {
    /// Point per index; first index on the left inset, last on the right.
    Points { left: f32, step: f32 },
    /// Slot per index; each slot holds one bar.
    Slots { left: f32, bar: BarLayout },
}

impl IndexScale {
    pub fn for_chart(kind: ChartKind, viewport: &Viewport, count: usize, style: &ChartStyle) -> Self {
        let left = viewport.insets.left;
        let usable_width = viewport.usable_width();
        match kind {
            ChartKind::Line => {
                let step = if count > 1 { usable_width / (count - 1) as f32 } else { 0.0 };
                IndexScale::Points { left, step }
            }
            ChartKind::Bar => IndexScale::Slots {
                left: left + BAR_AXIS_GAP,
                bar: BarLayout::resolve(style, usable_width, count),
            },
        }
    }

    /// Point X for line charts, slot left edge for bar charts.
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        match *self {
            IndexScale::Points { left, step } => left + index as f32 * step,
            IndexScale::Slots { left, bar } => left + index as f32 * (bar.width + bar.spacing),
        }
    }

    /// X used for labels, hit-testing and tooltips: the point, or the bar center.
    #[inline]
    pub fn anchor_px(&self, index: usize) -> f32 {
        match *self {
            IndexScale::Points { .. } => self.to_px(index),
            IndexScale::Slots { bar, .. } => self.to_px(index) + bar.width / 2.0,
        }
    }

    /// X where the horizontal axis line starts.
    pub fn axis_start_px(&self) -> f32 {
        match *self {
            IndexScale::Points { left, .. } | IndexScale::Slots { left, .. } => left,
        }
    }
}

/// Vertical mapping from value to pixel, normalized by the effective max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top: f32,
    pub height: f32,
    pub max: f64,
}

impl ValueScale {
    pub fn new(viewport: &Viewport, max: f64) -> Self {
        Self { top: viewport.insets.top, height: viewport.usable_height(), max }
    }

    #[inline]
    pub fn to_px(&self, value: f64, progress: f32) -> f32 {
        map_y(value, self.max, self.top, self.height, progress)
    }

    #[inline]
    pub fn baseline(&self) -> f32 {
        self.top + self.height
    }
}
