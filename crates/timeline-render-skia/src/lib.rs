// File: crates/timeline-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: replays a timeline scene onto a surface and
// encodes it as PNG or raw RGBA8.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use thiserror::Error;
use timeline_core::{Label, Layer, Mark, Point, RectF32, Renderer, Rgba, Scene};
use tracing::{debug, info};

pub mod text;

pub use text::TextShaper;

/// Straight segments per semicircle outline.
const ARC_SEGMENTS: usize = 48;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn color(c: Rgba, opacity: f32) -> skia::Color {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Fill);
    paint.set_color(color(c, opacity));
    paint
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c, 1.0));
    paint
}

fn sk_rect(r: RectF32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

/// [`Renderer`] that draws onto a Skia canvas.
pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaRenderer<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }
}

impl Renderer for SkiaRenderer<'_> {
    fn begin(&mut self, scene: &Scene) {
        self.canvas.clear(color(scene.background, 1.0));
    }

    fn begin_layer(&mut self, layer: &Layer) {
        if let Some(clip) = layer.clip {
            self.canvas.save();
            self.canvas.clip_rect(sk_rect(clip), skia::ClipOp::Intersect, true);
        }
    }

    fn end_layer(&mut self, layer: &Layer) {
        if layer.clip.is_some() {
            self.canvas.restore();
        }
    }

    fn line(&mut self, from: Point, to: Point, stroke: Rgba, width: f32) {
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke, width));
    }

    fn rect(&mut self, rect: RectF32, fill: Option<Rgba>, stroke: Option<Rgba>, stroke_width: f32) {
        let r = sk_rect(rect);
        if let Some(f) = fill {
            self.canvas.draw_rect(r, &fill_paint(f, 1.0));
        }
        if let Some(s) = stroke {
            self.canvas.draw_rect(r, &stroke_paint(s, stroke_width));
        }
    }

    fn text(&mut self, label: &Label) {
        self.shaper.draw(
            self.canvas,
            &label.text,
            label.pos.x,
            label.pos.y,
            label.size,
            color(label.fill, 1.0),
            label.anchor,
            label.baseline,
        );
    }

    fn semicircle(&mut self, mark: &Mark) {
        let outline = mark.shape.outline(ARC_SEGMENTS);
        let Some((first, rest)) = outline.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        path.close();
        self.canvas.draw_path(&path, &fill_paint(mark.fill, mark.fill_opacity));
        if mark.stroke_width > 0.0 {
            self.canvas.draw_path(&path, &stroke_paint(mark.stroke, mark.stroke_width));
        }
    }
}

fn draw(scene: &Scene) -> Result<skia::Surface, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
        .ok_or(RenderError::Surface { width: scene.width, height: scene.height })?;
    let shaper = TextShaper::new();
    scene.replay(&mut SkiaRenderer::new(surface.canvas(), &shaper));
    debug!(
        width = scene.width,
        height = scene.height,
        primitives = scene.primitive_count(),
        "scene rasterized"
    );
    Ok(surface)
}

/// Render a scene to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(scene: &Scene) -> Result<Vec<u8>, RenderError> {
    let mut surface = draw(scene)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render a scene to a PNG at `path`, creating parent directories.
pub fn render_to_png(scene: &Scene, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    let bytes = render_to_png_bytes(scene)?;
    let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, &bytes).map_err(io_err)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Render a scene to unpremultiplied RGBA8 pixels.
/// Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
    let mut surface = draw(scene)?;
    let (w, h) = (scene.width, scene.height);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok((pixels, w, h, stride))
}
