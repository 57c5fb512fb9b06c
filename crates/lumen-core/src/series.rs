// File: crates/lumen-core/src/series.rs
// Summary: Series and dataset model for line and bar charts.
// Notes:
// - A dataset is submitted whole for a draw cycle and replaced wholesale; the
//   engine never mutates it.
// - The first series is the reference: its length is the index domain every
//   other series and every X label aligns to.

use crate::types::Argb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// One point per index, joined by straight or smoothed paths.
    Line,
    /// One rounded bar per index; only the reference series is drawn.
    Bar,
}

impl ChartKind {
    /// Smallest reference length that produces geometry.
    pub const fn min_reference_len(self) -> usize {
        match self {
            ChartKind::Line => 2,
            ChartKind::Bar => 1,
        }
    }
}

/// Per-series drawing attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Argb,
    pub stroke_width: f32,
    pub show_points: bool,
    pub smooth: bool,
    pub point_radius: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Argb::BLACK,
            stroke_width: 4.0,
            show_points: false,
            smooth: false,
            point_radius: 6.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub values: Vec<f64>,
    pub style: SeriesStyle,
    pub title: Option<String>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, style: SeriesStyle::default(), title: None }
    }

    pub fn styled(values: Vec<f64>, style: SeriesStyle) -> Self {
        Self { values, style, title: None }
    }

    pub fn titled(values: Vec<f64>, style: SeriesStyle, title: impl Into<String>) -> Self {
        Self { values, style, title: Some(title.into()) }
    }

    /// Value at `index`, or `None` when the series is too short or the value is not finite.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().filter(|v| v.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub x_labels: Vec<String>,
}

impl Dataset {
    pub fn new(kind: ChartKind, series: Vec<Series>) -> Self {
        Self { kind, series, x_labels: Vec::new() }
    }

    pub fn line(series: Vec<Series>) -> Self {
        Self::new(ChartKind::Line, series)
    }

    /// Single-series bar chart.
    pub fn bars(values: Vec<f64>) -> Self {
        Self::new(ChartKind::Bar, vec![Series::new(values)])
    }

    pub fn with_x_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Length of the reference (first) series; zero when there is none.
    pub fn reference_len(&self) -> usize {
        self.series.first().map_or(0, |s| s.values.len())
    }

    pub fn reference(&self) -> Option<&Series> {
        self.series.first()
    }

    /// Series that contribute geometry for this chart kind.
    pub fn drawn_series(&self) -> &[Series] {
        match self.kind {
            ChartKind::Line => &self.series,
            ChartKind::Bar => &self.series[..self.series.len().min(1)],
        }
    }

    /// True when the dataset is large enough to draw anything.
    pub fn is_drawable(&self) -> bool {
        self.reference_len() >= self.kind.min_reference_len()
    }

    pub fn x_label(&self, index: usize) -> Option<&str> {
        self.x_labels.get(index).map(String::as_str)
    }

    /// Largest finite value across the drawn series within the reference domain.
    pub fn max_value(&self) -> Option<f64> {
        let n = self.reference_len();
        self.drawn_series()
            .iter()
            .flat_map(|s| s.values.iter().take(n).copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}
