// File: crates/timeline-core/src/svg.rs
// Summary: SVG backend; writes a scene as a standalone SVG document.

use std::path::Path;

use tracing::info;

use crate::error::TimelineError;
use crate::geometry::{Point, RectF32};
use crate::scene::{Label, Layer, Mark, Renderer, Scene, TextAnchor, TextBaseline};
use crate::theme::Rgba;

const CLIP_ID: &str = "chart-mask";

#[derive(Default)]
pub struct SvgRenderer {
    out: String,
    clips: usize,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Renderer for SvgRenderer {
    fn begin(&mut self, scene: &Scene) {
        self.out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" class="chart" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
            escape(&scene.root_id),
            scene.width,
            scene.height,
            scene.width,
            scene.height
        ));
        self.out.push('\n');
        self.out.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            scene.background.to_hex()
        ));
        self.out.push('\n');
    }

    fn begin_layer(&mut self, layer: &Layer) {
        match layer.clip {
            Some(c) => {
                let id = if self.clips == 0 { CLIP_ID.to_string() } else { format!("{CLIP_ID}-{}", self.clips) };
                self.clips += 1;
                self.out.push_str(&format!(
                    r#"<defs><clipPath id="{id}"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath></defs>"#,
                    c.left,
                    c.top,
                    c.width(),
                    c.height()
                ));
                self.out.push('\n');
                self.out.push_str(&format!(
                    r#"<g class="{}" clip-path="url(#{id})">"#,
                    escape(&layer.name)
                ));
            }
            None => self.out.push_str(&format!(r#"<g class="{}">"#, escape(&layer.name))),
        }
        self.out.push('\n');
    }

    fn end_layer(&mut self, _layer: &Layer) {
        self.out.push_str("</g>\n");
    }

    fn line(&mut self, from: Point, to: Point, stroke: Rgba, width: f32) {
        self.out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"{} stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke.to_hex(),
            opacity_attr("stroke-opacity", stroke),
            width
        ));
        self.out.push('\n');
    }

    fn rect(&mut self, rect: RectF32, fill: Option<Rgba>, stroke: Option<Rgba>, stroke_width: f32) {
        let fill_attr = match fill {
            Some(c) => format!(r#" fill="{}"{}"#, c.to_hex(), opacity_attr("fill-opacity", c)),
            None => r#" fill="none""#.to_string(),
        };
        let stroke_attr = match stroke {
            Some(c) => format!(
                r#" stroke="{}"{} stroke-width="{}""#,
                c.to_hex(),
                opacity_attr("stroke-opacity", c),
                stroke_width
            ),
            None => String::new(),
        };
        self.out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{fill_attr}{stroke_attr}/>"#,
            rect.left,
            rect.top,
            rect.width(),
            rect.height()
        ));
        self.out.push('\n');
    }

    fn text(&mut self, label: &Label) {
        let anchor = match label.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let dy = match label.baseline {
            TextBaseline::Alphabetic => "",
            TextBaseline::Middle => r#" dy="0.32em""#,
        };
        self.out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}"{dy} text-anchor="{anchor}" font-size="{}" fill="{}">{}</text>"#,
            label.pos.x,
            label.pos.y,
            label.size,
            label.fill.to_hex(),
            escape(&label.text)
        ));
        self.out.push('\n');
    }

    fn semicircle(&mut self, mark: &Mark) {
        let title = match &mark.title {
            Some(t) => format!("<title>{}</title>", escape(t)),
            None => String::new(),
        };
        self.out.push_str(&format!(
            r#"<path class="mark" d="{}" fill="{}" fill-opacity="{:.2}" stroke="{}" stroke-width="{}">{title}</path>"#,
            mark.shape.svg_path(),
            mark.fill.to_hex(),
            mark.fill_opacity * mark.fill.alpha_f32(),
            mark.stroke.to_hex(),
            mark.stroke_width
        ));
        self.out.push('\n');
    }

    fn finish(&mut self) {
        self.out.push_str("</svg>\n");
    }
}

/// Render a scene to an SVG document string.
pub fn render_svg(scene: &Scene) -> String {
    let mut r = SvgRenderer::new();
    scene.replay(&mut r);
    r.into_string()
}

/// Render a scene and write it to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<(), TimelineError> {
    let path = path.as_ref();
    let write_err = |source| TimelineError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, render_svg(scene)).map_err(write_err)?;
    info!(path = %path.display(), "wrote svg");
    Ok(())
}

fn opacity_attr(name: &str, c: Rgba) -> String {
    if c.a == 255 { String::new() } else { format!(r#" {name}="{:.2}""#, c.alpha_f32()) }
}

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
