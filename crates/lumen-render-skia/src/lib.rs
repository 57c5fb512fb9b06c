// File: crates/lumen-render-skia/src/lib.rs
// Summary: Skia backend; paints a geometry snapshot onto a canvas or a CPU raster PNG.

use anyhow::Result;
use lumen_core::{
    Argb, AxisGeometry, BarGeometry, Fill, Geometry, LineGeometry, LineSegment, Plot, RectF, TooltipBox, Viewport,
};
use skia_safe as skia;

pub mod paint;
pub mod text;

use paint::{fill_paint, stroke_paint, to_color, to_path, to_point};
pub use text::TextShaper;

pub struct RenderOptions {
    pub background: Argb,
    /// Text depends on installed fonts; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: Argb::WHITE, draw_labels: true }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Paint `geometry` in back-to-front order: plot, axes, tooltip.
    /// A fade opacity below 1 wraps everything in one translucent layer.
    pub fn draw(&self, canvas: &skia::Canvas, geometry: &Geometry) {
        let layered = geometry.opacity < 1.0;
        if layered {
            let alpha = (geometry.opacity.clamp(0.0, 1.0) * 255.0).round() as u32;
            canvas.save_layer_alpha(None::<skia::Rect>, alpha);
        }

        match &geometry.plot {
            Plot::Lines(lines) => lines.iter().for_each(|l| self.draw_line(canvas, l)),
            Plot::Bars(bars) => bars.iter().for_each(|b| self.draw_bar(canvas, b)),
        }
        if let Some(axes) = &geometry.axes {
            self.draw_axes(canvas, axes);
        }
        if let Some(tip) = &geometry.tooltip {
            self.draw_tooltip(canvas, tip);
        }

        if layered {
            canvas.restore();
        }
    }

    fn draw_line(&self, canvas: &skia::Canvas, line: &LineGeometry) {
        if let Some(area) = &line.fill {
            if !area.gradient.stops.is_empty() {
                let paint = fill_paint(&Fill::Gradient(area.gradient.clone()));
                canvas.draw_path(&to_path(&area.path), &paint);
            }
        }

        canvas.draw_path(&to_path(&line.path), &stroke_paint(line.color, line.stroke_width));

        if !line.markers.is_empty() {
            let dot = fill_paint(&Fill::Solid(line.color));
            for m in &line.markers {
                canvas.draw_circle(to_point(m.center), m.radius, &dot);
            }
        }
    }

    fn draw_bar(&self, canvas: &skia::Canvas, bar: &BarGeometry) {
        let r = bar.corner_radius;
        canvas.draw_round_rect(to_rect(bar.rect), r, r, &fill_paint(&bar.fill));
    }

    fn draw_axes(&self, canvas: &skia::Canvas, axes: &AxisGeometry) {
        draw_segment(canvas, &axes.x_axis);
        draw_segment(canvas, &axes.y_axis);
        if !self.opts.draw_labels {
            return;
        }
        for label in axes.x_ticks.iter().filter_map(|t| t.label.as_ref()) {
            self.text.draw(canvas, label);
        }
        for tick in &axes.y_ticks {
            self.text.draw(canvas, &tick.label);
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, tip: &TooltipBox) {
        let rect = to_rect(tip.rect);
        let r = tip.corner_radius;
        canvas.draw_round_rect(rect, r, r, &fill_paint(&Fill::Solid(tip.background)));
        canvas.draw_round_rect(rect, r, r, &stroke_paint(tip.border, 2.0));
        if !self.opts.draw_labels {
            return;
        }
        self.text.draw(canvas, &tip.title);
        for row in &tip.rows {
            self.text.draw(canvas, &row.label);
        }
    }

    /// Render onto a fresh CPU raster surface sized to `viewport`; returns PNG bytes.
    pub fn render_to_png_bytes(&self, geometry: &Geometry, viewport: &Viewport) -> Result<Vec<u8>> {
        let (w, h) = (viewport.width.round() as i32, viewport.height.round() as i32);
        if w <= 0 || h <= 0 {
            anyhow::bail!("cannot render a {w}x{h} viewport");
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_color(self.opts.background));
        self.draw(canvas, geometry);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        let bytes = data.as_bytes().to_vec();
        tracing::trace!(width = w, height = h, bytes = bytes.len(), "frame encoded");
        Ok(bytes)
    }

    pub fn render_to_png(
        &self,
        geometry: &Geometry,
        viewport: &Viewport,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(geometry, viewport)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

fn to_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn draw_segment(canvas: &skia::Canvas, seg: &LineSegment) {
    let mut paint = stroke_paint(seg.color, seg.stroke_width);
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    canvas.draw_line(to_point(seg.from), to_point(seg.to), &paint);
}
