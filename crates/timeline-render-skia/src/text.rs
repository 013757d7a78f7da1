// File: crates/timeline-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor and baseline placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use timeline_core::{TextAnchor, TextBaseline};

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
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that `(x, y)` is its anchor point on the given baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) {
        let mut p = self.layout(text, size, color);
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - p.longest_line() * 0.5,
            TextAnchor::End => x - p.longest_line(),
        };
        // Paragraph draws from top-left
        let top = match baseline {
            TextBaseline::Alphabetic => y - size * 0.8,
            TextBaseline::Middle => y - p.height() * 0.5,
        };
        p.paint(canvas, (left, top));
    }
}
