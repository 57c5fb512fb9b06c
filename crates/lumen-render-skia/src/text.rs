// File: crates/lumen-render-skia/src/text.rs
// Summary: Label shaping on Skia textlayout, anchored at a baseline point with
// left, center or right alignment.

use lumen_core::{TextAlign, TextLabel};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::paint::to_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, bold).longest_line()
    }

    /// Paint `label` so its baseline passes through `label.anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, label: &TextLabel) {
        if label.text.is_empty() {
            return;
        }
        let mut p = self.layout(&label.text, label.size, to_color(label.color), label.bold);
        let width = p.longest_line();
        let x = match label.align {
            TextAlign::Left => label.anchor.x,
            TextAlign::Center => label.anchor.x - width / 2.0,
            TextAlign::Right => label.anchor.x - width,
        };
        // Paragraphs paint from their top-left; approximate the ascent.
        p.paint(canvas, (x, label.anchor.y - label.size * 0.8));
    }
}
