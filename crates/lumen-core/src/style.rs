// File: crates/lumen-core/src/style.rs
// Summary: Caller-supplied styling: bar sizing, gradients, axis and Y label configuration.

use crate::types::Argb;

/// Y axis labelling mode. The two modes are mutually exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum YLabels {
    /// `n` evenly spaced values from the effective max down to zero.
    Count(usize),
    /// Caller text, listed bottom to top and spread evenly over the plot height.
    Explicit(Vec<String>),
}

/// Colors for non-series chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub axis_line: Argb,
    pub axis_label: Argb,
    pub value_label: Argb,
    pub tooltip_background: Argb,
    pub tooltip_border: Argb,
    pub tooltip_title: Argb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            axis_line: Argb::LIGHT_GRAY,
            axis_label: Argb::DARK_GRAY,
            value_label: Argb::GRAY,
            tooltip_background: Argb::WHITE,
            tooltip_border: Argb::LIGHT_GRAY,
            tooltip_title: Argb::BLACK,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Absolute bar width in px; `None` derives it from the bar count.
    pub bar_width: Option<f32>,
    /// Absolute gap between bars in px; `None` derives it from the bar width.
    pub bar_spacing: Option<f32>,
    /// Per-bar colors; bars past the end of the list use `bar_gradient`.
    pub bar_colors: Vec<Argb>,
    pub bar_gradient: Vec<Argb>,
    /// Fill under the primary line series, drawn only when `show_gradient` is set.
    pub fill_gradient: Vec<Argb>,
    pub show_gradient: bool,
    pub show_axis: bool,
    pub palette: Palette,
    /// Prefer the setters; they reject configurations with fewer than two entries.
    pub y_labels: YLabels,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: None,
            bar_spacing: None,
            bar_colors: Vec::new(),
            bar_gradient: vec![Argb(0xFF3B_82F6), Argb(0xFF60_A5FA)],
            fill_gradient: vec![Argb::BLUE, Argb::TRANSPARENT],
            show_gradient: false,
            show_axis: true,
            palette: Palette::default(),
            y_labels: YLabels::Count(5),
        }
    }
}

impl ChartStyle {
    /// Defaults tuned for bar charts (six value ticks).
    pub fn bars() -> Self {
        Self { y_labels: YLabels::Count(6), ..Self::default() }
    }

    pub fn y_labels(&self) -> &YLabels {
        &self.y_labels
    }

    /// Switch to auto-generated Y labels. Counts below 2 are ignored and the
    /// current configuration is kept. Returns whether the value was applied.
    pub fn set_y_label_count(&mut self, count: usize) -> bool {
        if count < 2 {
            tracing::debug!(count, "ignoring y label count below 2");
            return false;
        }
        self.y_labels = YLabels::Count(count);
        true
    }

    /// Switch to explicit Y labels. Lists shorter than 2 are ignored and the
    /// current configuration is kept. Returns whether the labels were applied.
    pub fn set_y_labels<I, S>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() < 2 {
            tracing::debug!(len = labels.len(), "ignoring explicit y labels shorter than 2");
            return false;
        }
        self.y_labels = YLabels::Explicit(labels);
        true
    }

    pub fn with_y_label_count(mut self, count: usize) -> Self {
        self.set_y_label_count(count);
        self
    }

    pub fn with_y_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_y_labels(labels);
        self
    }

    /// Color override for bar `index`, if the caller supplied one.
    pub fn bar_color(&self, index: usize) -> Option<Argb> {
        self.bar_colors.get(index).copied()
    }
}

/// Convert density-independent pixels to pixels.
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    dp * density
}
