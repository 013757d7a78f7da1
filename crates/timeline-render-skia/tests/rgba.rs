// File: crates/timeline-render-skia/tests/rgba.rs
// Purpose: RGBA buffer shape, background pixels and glyph clipping.

use chrono::NaiveDate;
use timeline_core::{Category, DisasterRecord, Theme, TimelineConfig, TimelineView};
use timeline_render_skia::render_to_rgba8;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn record(name: &str, category: Category, cost: f64, y: i32, m: u32, d: u32) -> DisasterRecord {
    let mid = NaiveDate::from_ymd_opt(y, m, d).expect("date");
    DisasterRecord::try_new(name, category, cost, y, mid).expect("record")
}

#[test]
fn render_rgba8_buffer() {
    let view = TimelineView::new(TimelineConfig::default(), Vec::new());
    let (px, w, h, stride) = render_to_rgba8(view.scene()).expect("rgba render");
    assert_eq!((w, h), (800, 900));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let config = TimelineConfig::default().with_theme(Theme::dark());
    let view = TimelineView::new(config, Vec::new());
    let (px, _, _, stride) = render_to_rgba8(view.scene()).expect("rgba render");
    let bg = Theme::dark().background;
    assert_eq!(pixel(&px, stride, 2, 890), [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn glyphs_are_clipped_to_the_plot() {
    // Jan 1 sits left of the plot; most of this large glyph is outside it.
    let data = vec![
        record("Early", Category::TropicalCyclone, 80.0, 2000, 1, 1),
        record("Small", Category::SevereStorm, 1.0, 1985, 6, 1),
    ];
    let view = TimelineView::new(TimelineConfig::default(), data);
    let glyph = view.scene().glyphs.iter().find(|g| g.name == "Early").expect("glyph").clone();
    let (px, _, _, stride) = render_to_rgba8(view.scene()).expect("rgba render");

    // Halfway between two year rows, clear of the tick labels.
    let y = (glyph.shape.center.y - 10.5) as usize;
    // Inside the shape but in the left margin: background.
    assert_eq!(pixel(&px, stride, 20, y), [255, 255, 255, 255]);
    // Inside the shape and the plot: tinted by the cyclone fill.
    let inside = pixel(&px, stride, 70, y);
    assert_ne!(inside, [255, 255, 255, 255]);
}
