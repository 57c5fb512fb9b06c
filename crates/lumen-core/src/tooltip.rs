// File: crates/lumen-core/src/tooltip.rs
// Summary: Tooltip box layout for the selected index, clamped to the viewport.

use crate::geometry::{Point, RectF, TextAlign, TextLabel};
use crate::series::Dataset;
use crate::style::Palette;
use crate::types::{Argb, Viewport};

pub const TOOLTIP_WIDTH: f32 = 250.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 60.0;
pub const TOOLTIP_PADDING: f32 = 20.0;
pub const TOOLTIP_TITLE_HEIGHT: f32 = 36.0;
/// Minimum gap between the box and the left/right viewport edges.
pub const TOOLTIP_EDGE_MARGIN: f32 = 10.0;
pub const TOOLTIP_CORNER_RADIUS: f32 = 16.0;

const TOP_OFFSET: f32 = 20.0;
const TITLE_SIZE: f32 = 36.0;
const TITLE_BASELINE: f32 = 50.0;
const ROW_SIZE: f32 = 32.0;
const ROW_BASELINE: f32 = 70.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub series_index: usize,
    pub value: f64,
    pub label: TextLabel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipBox {
    pub index: usize,
    pub rect: RectF,
    pub corner_radius: f32,
    pub background: Argb,
    pub border: Argb,
    pub title: TextLabel,
    pub rows: Vec<TooltipRow>,
}

/// Box height for `series_count` rows: padding, title, rows, then three paddings.
pub fn tooltip_height(series_count: usize) -> f32 {
    TOOLTIP_PADDING + TOOLTIP_TITLE_HEIGHT + series_count as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 3.0
}

/// Left edge of a box centered on `anchor_x`, kept `TOOLTIP_EDGE_MARGIN` inside
/// both viewport edges. The left margin wins when the viewport is too narrow.
pub fn tooltip_left(anchor_x: f32, viewport_width: f32) -> f32 {
    let centered = anchor_x - TOOLTIP_WIDTH / 2.0;
    TOOLTIP_EDGE_MARGIN.max(centered.min(viewport_width - TOOLTIP_WIDTH - TOOLTIP_EDGE_MARGIN))
}

pub fn row_text(title: Option<&str>, value: f64) -> String {
    match title {
        Some(t) => format!("{t}: {value:.0}"),
        None => format!("{value:.0}"),
    }
}

/// Lay out the tooltip for `index`, whose anchor sits at `anchor_x`.
///
/// Rows keep their series slot, so a series without a value at `index`
/// leaves a gap instead of shifting the rows below it.
pub fn layout_tooltip(
    index: usize,
    anchor_x: f32,
    dataset: &Dataset,
    viewport: &Viewport,
    palette: &Palette,
) -> TooltipBox {
    let series = dataset.drawn_series();
    let left = tooltip_left(anchor_x, viewport.width);
    let top = viewport.insets.top + TOP_OFFSET;
    let rect = RectF::from_ltwh(left, top, TOOLTIP_WIDTH, tooltip_height(series.len()));
    let center_x = rect.center_x();

    let title = TextLabel {
        text: dataset.x_label(index).unwrap_or_default().to_string(),
        anchor: Point::new(center_x, top + TITLE_BASELINE + TOOLTIP_PADDING),
        align: TextAlign::Center,
        size: TITLE_SIZE,
        color: palette.tooltip_title,
        bold: true,
    };

    let rows = series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let value = s.value_at(index)?;
            let y = top + ROW_BASELINE + i as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_LINE_HEIGHT;
            Some(TooltipRow {
                series_index: i,
                value,
                label: TextLabel {
                    text: row_text(s.title.as_deref(), value),
                    anchor: Point::new(center_x, y),
                    align: TextAlign::Center,
                    size: ROW_SIZE,
                    color: s.style.color,
                    bold: true,
                },
            })
        })
        .collect();

    TooltipBox {
        index,
        rect,
        corner_radius: TOOLTIP_CORNER_RADIUS,
        background: palette.tooltip_background,
        border: palette.tooltip_border,
        title,
        rows,
    }
}
