// File: crates/timeline-core/src/scene.rs
// Summary: Backend-independent drawables produced by the timeline view, and the
// renderer trait the SVG and raster backends implement.

use crate::geometry::{Point, RectF32, Semicircle};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// `pos.y` is the alphabetic baseline.
    Alphabetic,
    /// `pos.y` is the vertical centre of the text.
    Middle,
}

/// Positioned text run.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub pos: Point,
    pub text: String,
    pub size: f32,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    pub fill: Rgba,
}

/// Filled and stroked semicircle glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub shape: Semicircle,
    pub fill: Rgba,
    pub fill_opacity: f32,
    pub stroke: Rgba,
    pub stroke_width: f32,
    /// Hover text; SVG output carries it as a `<title>`.
    pub title: Option<String>,
}

/// One drawable, in absolute canvas pixels with colours already resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: Rgba,
        width: f32,
    },
    Rect {
        rect: RectF32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    Text(Label),
    Semicircle(Mark),
}

/// Named group of primitives drawn in order, optionally clipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub clip: Option<RectF32>,
    pub items: Vec<Primitive>,
}

impl Layer {
    pub fn new(name: impl Into<String>, clip: Option<RectF32>) -> Self {
        Self { name: name.into(), clip, items: Vec::new() }
    }

    pub fn with_items(mut self, items: Vec<Primitive>) -> Self {
        self.items = items;
        self
    }
}

/// Hit-testable glyph, linked back to the record it was drawn for.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub shape: Semicircle,
    /// Index into the view's active dataset.
    pub record: usize,
    pub name: String,
    pub cost: f64,
    /// Clip applied to the glyph's layer; points outside never hit.
    pub clip: Option<RectF32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    /// Id of the root element in document outputs.
    pub root_id: String,
    pub layers: Vec<Layer>,
    /// In draw order.
    pub glyphs: Vec<Glyph>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba, root_id: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background,
            root_id: root_id.into(),
            layers: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    /// Topmost (last drawn) glyph under `p`.
    pub fn glyph_at(&self, p: Point) -> Option<&Glyph> {
        self.glyphs
            .iter()
            .rev()
            .find(|g| g.clip.map_or(true, |c| c.contains(p)) && g.shape.contains(p))
    }

    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.items.len()).sum()
    }

    /// Drive a backend through every layer in order.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin(self);
        for layer in &self.layers {
            renderer.begin_layer(layer);
            for item in &layer.items {
                match item {
                    Primitive::Line { from, to, stroke, width } => renderer.line(*from, *to, *stroke, *width),
                    Primitive::Rect { rect, fill, stroke, stroke_width } => {
                        renderer.rect(*rect, *fill, *stroke, *stroke_width)
                    }
                    Primitive::Text(label) => renderer.text(label),
                    Primitive::Semicircle(mark) => renderer.semicircle(mark),
                }
            }
            renderer.end_layer(layer);
        }
        renderer.finish();
    }
}

/// Drawing backend. Layers with a clip must confine their items to it until
/// `end_layer`.
pub trait Renderer {
    fn begin(&mut self, scene: &Scene);
    fn begin_layer(&mut self, layer: &Layer);
    fn end_layer(&mut self, layer: &Layer);
    fn line(&mut self, from: Point, to: Point, stroke: Rgba, width: f32);
    fn rect(&mut self, rect: RectF32, fill: Option<Rgba>, stroke: Option<Rgba>, stroke_width: f32);
    fn text(&mut self, label: &Label);
    fn semicircle(&mut self, mark: &Mark);
    fn finish(&mut self) {}
}
