// File: crates/lumen-render-skia/src/paint.rs
// Summary: Conversions from backend-free geometry to Skia colors, paths and paints.

use lumen_core::{Argb, Fill, LinearGradient, Path, PathCommand, Point};
use skia_safe as skia;

#[inline]
pub fn to_color(c: Argb) -> skia::Color {
    skia::Color::from_argb(c.alpha(), c.red(), c.green(), c.blue())
}

#[inline]
pub fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

pub fn to_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in &path.commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.move_to(to_point(p));
            }
            PathCommand::LineTo(p) => {
                out.line_to(to_point(p));
            }
            PathCommand::QuadTo { ctrl, to } => {
                out.quad_to(to_point(ctrl), to_point(to));
            }
            PathCommand::Close => {
                out.close();
            }
        }
    }
    out
}

/// Vertical gradient shader; `None` with fewer than two stops.
pub fn gradient_shader(g: &LinearGradient) -> Option<skia::Shader> {
    if g.stops.len() < 2 {
        return None;
    }
    let colors: Vec<skia::Color> = g.stops.iter().copied().map(to_color).collect();
    skia::Shader::linear_gradient(
        ((0.0, g.y0), (0.0, g.y1)),
        colors.as_slice(),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    )
}

pub fn fill_paint(fill: &Fill) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    match fill {
        Fill::Solid(c) => {
            paint.set_color(to_color(*c));
        }
        Fill::Gradient(g) => match g.stops.as_slice() {
            [single] => {
                paint.set_color(to_color(*single));
            }
            _ => {
                paint.set_shader(gradient_shader(g));
            }
        },
    }
    paint
}

pub fn stroke_paint(color: Argb, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(to_color(color));
    paint
}
