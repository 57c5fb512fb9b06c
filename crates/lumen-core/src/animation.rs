// File: crates/lumen-core/src/animation.rs
// Summary: Reveal animation: easing curves, the arm/run/settle state machine and the driver seam.
//
// The engine owns no clock. When a freshly armed chart is first drawn it hands an
// `AnimationRequest` to the host's `AnimationDriver`; the driver then reports the
// elapsed fraction of the duration on every frame via `Animator::advance`.

use std::time::Duration;

/// Default reveal duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(6000);

const OVERSHOOT_TENSION: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationKind {
    /// No reveal; geometry appears settled on the first draw.
    #[default]
    None,
    Linear,
    /// Fast-out-slow-in accelerate/decelerate.
    EaseInOut,
    /// Overshoots past 1.0 before settling back.
    Wave,
    /// Accelerate/decelerate, also exposed as an opacity for the backend.
    Fade,
}

impl AnimationKind {
    /// Map a linear time fraction in [0, 1] to progress. Every curve maps 0 to 0 and 1 to 1.
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            AnimationKind::None => 1.0,
            AnimationKind::Linear => t,
            AnimationKind::EaseInOut => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            AnimationKind::Fade => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
            AnimationKind::Wave => {
                let t = t - 1.0;
                t * t * ((OVERSHOOT_TENSION + 1.0) * t + OVERSHOOT_TENSION) + 1.0
            }
        }
    }
}

/// CSS-style cubic Bézier timing curve with endpoints (0,0) and (1,1).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let coord = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    // Newton first, bisection if the slope flattens out.
    let mut s = t;
    for _ in 0..8 {
        let err = coord(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return coord(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = coord(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t { lo = s } else { hi = s }
        s = (lo + hi) / 2.0;
    }
    coord(y1, y2, s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub kind: AnimationKind,
    pub duration: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { kind: AnimationKind::None, duration: DEFAULT_DURATION }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No dataset yet.
    Idle,
    /// A dataset was just set; progress is 0 until the next draw hands off.
    Armed,
    /// The driver is pushing progress.
    Running,
    /// Progress is 1 and geometry is stable.
    Settled,
}

/// What a driver is asked to play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    pub duration: Duration,
}

impl AnimationRequest {
    /// Linear fraction of the duration elapsed, clamped to [0, 1].
    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

/// Host clock that plays reveal animations.
///
/// `start` replaces whatever the driver was playing before; the host then feeds
/// `Animator::advance` (through the chart) with the elapsed fraction each frame.
pub trait AnimationDriver {
    fn start(&mut self, request: AnimationRequest);
}

/// Driver that only records requests. Hosts (and tests) step it by hand.
#[derive(Debug, Default)]
pub struct ManualDriver {
    pub requests: Vec<AnimationRequest>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&AnimationRequest> {
        self.requests.last()
    }
}

impl AnimationDriver for ManualDriver {
    fn start(&mut self, request: AnimationRequest) {
        self.requests.push(request);
    }
}

#[derive(Clone, Debug)]
pub struct Animator {
    config: AnimationConfig,
    phase: Phase,
    progress: f32,
    // Curve of the animation handed to the driver.
    active: AnimationKind,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl Animator {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config, phase: Phase::Idle, progress: 0.0, active: config.kind }
    }

    pub fn config(&self) -> AnimationConfig { self.config }
    pub fn phase(&self) -> Phase { self.phase }

    /// Eased progress. May exceed 1.0 while a `Wave` animation overshoots.
    pub fn progress(&self) -> f32 { self.progress }

    /// Takes effect at the next hand-off; a running animation keeps its curve.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Force progress to 0 and wait for the next draw. Called on every dataset
    /// replacement, including replacement with an equal dataset.
    pub fn arm(&mut self) {
        tracing::debug!(from = ?self.phase, "arming reveal animation");
        self.phase = Phase::Armed;
        self.progress = 0.0;
    }

    /// Draw-request hook. Moves Armed to Running (handing the request to the
    /// driver) or straight to Settled when animation is off.
    pub fn on_draw(&mut self, driver: &mut dyn AnimationDriver) {
        if self.phase != Phase::Armed {
            return;
        }
        if self.config.kind == AnimationKind::None {
            tracing::debug!("animation disabled, settling immediately");
            self.settle();
            return;
        }
        let request = AnimationRequest { kind: self.config.kind, duration: self.config.duration };
        tracing::debug!(kind = ?request.kind, duration_ms = request.duration.as_millis() as u64, "starting reveal animation");
        self.phase = Phase::Running;
        self.progress = 0.0;
        self.active = request.kind;
        driver.start(request);
    }

    /// Apply a linear fraction from the driver. Ignored unless Running.
    pub fn advance(&mut self, fraction: f32) -> f32 {
        if self.phase != Phase::Running {
            return self.progress;
        }
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        if fraction >= 1.0 {
            self.settle();
        } else {
            self.progress = self.active.ease(fraction);
        }
        self.progress
    }

    /// Opacity the backend may layer on top of position for `Fade`.
    pub fn opacity(&self) -> f32 {
        match (self.active, self.phase) {
            (AnimationKind::Fade, Phase::Running) => self.progress.clamp(0.0, 1.0),
            (_, Phase::Armed) if self.config.kind == AnimationKind::Fade => 0.0,
            _ => 1.0,
        }
    }

    fn settle(&mut self) {
        tracing::debug!("reveal animation settled");
        self.phase = Phase::Settled;
        self.progress = 1.0;
    }
}
