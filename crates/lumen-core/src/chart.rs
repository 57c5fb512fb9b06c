// File: crates/lumen-core/src/chart.rs
// Summary: Chart facade holding the caller's current inputs next to one engine;
// this is the surface a view layer or rendering backend talks to.

use crate::animation::{AnimationConfig, AnimationDriver, Phase};
use crate::engine::{Engine, FrameInput, Geometry, PointPick};
use crate::series::Dataset;
use crate::style::ChartStyle;
use crate::types::Viewport;

pub struct Chart {
    dataset: Option<Dataset>,
    viewport: Viewport,
    style: ChartStyle,
    engine: Engine,
}

impl Chart {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            dataset: None,
            viewport,
            style: ChartStyle::default(),
            engine: Engine::default(),
        }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_animation(mut self, config: AnimationConfig) -> Self {
        self.engine.set_animation(config);
        self
    }

    /// Replace the dataset and re-arm the reveal animation, even when the new
    /// dataset equals the old one.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.engine.dataset_replaced(&dataset);
        self.dataset = Some(dataset);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    pub fn style_mut(&mut self) -> &mut ChartStyle {
        &mut self.style
    }

    pub fn set_animation(&mut self, config: AnimationConfig) {
        self.engine.set_animation(config);
    }

    pub fn set_selection(&mut self, index: Option<usize>) {
        self.engine.set_selection(index);
    }

    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn style(&self) -> &ChartStyle { &self.style }
    pub fn phase(&self) -> Phase { self.engine.phase() }
    pub fn progress(&self) -> f32 { self.engine.progress() }
    pub fn selection(&self) -> Option<usize> { self.engine.selection() }

    fn input(&self) -> Option<FrameInput<'_>> {
        self.dataset.as_ref().map(|dataset| FrameInput {
            dataset,
            viewport: &self.viewport,
            style: &self.style,
        })
    }

    /// Snapshot at the current progress; empty without a dataset.
    pub fn compute_geometry(&self) -> Geometry {
        self.input().map_or_else(Geometry::empty, |input| self.engine.compute(&input))
    }

    /// Frame request from the view: may hand an armed animation to `driver`.
    pub fn draw(&mut self, driver: &mut dyn AnimationDriver) -> Geometry {
        let Some(dataset) = self.dataset.as_ref() else {
            return Geometry::empty();
        };
        let input = FrameInput { dataset, viewport: &self.viewport, style: &self.style };
        self.engine.draw(&input, driver)
    }

    /// Driver tick with the elapsed linear fraction; returns the new snapshot.
    pub fn advance_animation(&mut self, fraction: f32) -> Geometry {
        self.engine.advance_animation(fraction);
        self.compute_geometry()
    }

    pub fn hit_test(&self, pointer_x: f32) -> Option<usize> {
        self.input().and_then(|input| crate::engine::hit_test(&input, pointer_x))
    }

    /// Pointer-down from the view: updates the selection and reports the pick.
    pub fn pointer_down(&mut self, pointer_x: f32) -> Option<PointPick> {
        let Some(dataset) = self.dataset.as_ref() else {
            self.engine.set_selection(None);
            return None;
        };
        let input = FrameInput { dataset, viewport: &self.viewport, style: &self.style };
        self.engine.pointer_down(&input, pointer_x)
    }
}
