// File: crates/lumen-core/src/lib.rs
// Summary: Core library entry point; exports the geometry engine, animation and interaction API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod plot;
pub mod scale;
pub mod series;
pub mod style;
pub mod tooltip;
pub mod types;

pub use animation::{AnimationConfig, AnimationDriver, AnimationKind, AnimationRequest, Animator, ManualDriver, Phase};
pub use axis::{AxisGeometry, XTick, YTick};
pub use chart::Chart;
pub use engine::{compute_geometry, hit_test, Engine, FrameInput, Geometry, Layout, Plot, PointPick};
pub use error::ColorParseError;
pub use geometry::{Fill, LineSegment, LinearGradient, Path, PathCommand, Point, RectF, TextAlign, TextLabel};
pub use plot::{AreaFill, BarGeometry, LineGeometry, Marker};
pub use scale::{content_width, effective_max, map_x, map_y, BarLayout, IndexScale, ValueScale};
pub use series::{ChartKind, Dataset, Series, SeriesStyle};
pub use style::{dp_to_px, ChartStyle, Palette, YLabels};
pub use tooltip::{TooltipBox, TooltipRow};
pub use types::{Argb, Insets, Viewport};
