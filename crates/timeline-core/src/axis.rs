// File: crates/timeline-core/src/axis.rs
// Summary: Axis model (ticks, labels, tick sizing) for the month and year axes.

use crate::geometry::Point;
use crate::grid::nice_ticks;
use crate::scale::{MonthScale, YearScale};
use crate::scene::{Label, Primitive, TextAnchor, TextBaseline};
use crate::theme::Rgba;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Which side of the plot the axis sits on. Ticks and labels point away from
/// the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Top,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Position along the axis, relative to the plot origin.
    pub offset_px: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub line: Rgba,
    /// Used instead of `line` for ticks that extend across the plot.
    pub grid: Rgba,
    pub label: Rgba,
    pub font_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Pixel extent of the domain line, relative to the plot origin.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    /// Negative values draw ticks into the plot (grid lines).
    pub tick_size_inner: f32,
    pub tick_size_outer: f32,
    pub tick_padding: f32,
}

impl Axis {
    /// Twelve month ticks above the plot.
    pub fn months(scale: &MonthScale) -> Self {
        let ticks = MONTHS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = (i + 1) as f64;
                Tick { value, label: (*name).to_string(), offset_px: scale.map(value) as f32 }
            })
            .collect();
        Self {
            orient: Orient::Top,
            range: (scale.range.0 as f32, scale.range.1 as f32),
            ticks,
            tick_size_inner: 11.0,
            tick_size_outer: 0.0,
            tick_padding: 8.0,
        }
    }

    /// Whole-year ticks left of the plot, with grid lines `inner_width` long.
    pub fn years(scale: &YearScale, inner_width: f32, count: usize) -> Self {
        let (d0, d1) = scale.domain;
        let ticks = nice_ticks(d0, d1, count)
            .into_iter()
            .filter(|v| v.fract() == 0.0)
            .map(|value| Tick {
                value,
                label: format!("{}", value as i64),
                offset_px: scale.map(value) as f32,
            })
            .collect();
        Self {
            orient: Orient::Left,
            range: (scale.range.0 as f32, scale.range.1 as f32),
            ticks,
            tick_size_inner: -inner_width,
            tick_size_outer: 0.0,
            tick_padding: 10.0,
        }
    }

    pub fn tick_labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().map(|t| t.label.as_str())
    }

    /// Domain line, tick lines and labels, translated to `origin`.
    pub fn primitives(&self, origin: Point, style: &AxisStyle) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(self.ticks.len() * 2 + 3);
        let (r0, r1) = self.range;
        let tick_stroke = if self.tick_size_inner < 0.0 { style.grid } else { style.line };
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;

        // Ticks first so the domain line stays on top of grid lines.
        for t in &self.ticks {
            let (from, to, pos, anchor, baseline) = match self.orient {
                Orient::Top => (
                    origin.offset(t.offset_px, 0.0),
                    origin.offset(t.offset_px, -self.tick_size_inner),
                    origin.offset(t.offset_px, -spacing),
                    TextAnchor::Middle,
                    TextBaseline::Alphabetic,
                ),
                Orient::Left => (
                    origin.offset(0.0, t.offset_px),
                    origin.offset(-self.tick_size_inner, t.offset_px),
                    origin.offset(-spacing, t.offset_px),
                    TextAnchor::End,
                    TextBaseline::Middle,
                ),
            };
            out.push(Primitive::Line { from, to, stroke: tick_stroke, width: 1.0 });
            out.push(Primitive::Text(Label {
                pos,
                text: t.label.clone(),
                size: style.font_size,
                anchor,
                baseline,
                fill: style.label,
            }));
        }

        let outer = -self.tick_size_outer;
        let (a, b) = match self.orient {
            Orient::Top => (origin.offset(r0, 0.0), origin.offset(r1, 0.0)),
            Orient::Left => (origin.offset(0.0, r0), origin.offset(0.0, r1)),
        };
        out.push(Primitive::Line { from: a, to: b, stroke: style.line, width: 1.0 });
        if outer != 0.0 {
            for end in [a, b] {
                let cap = match self.orient {
                    Orient::Top => end.offset(0.0, outer),
                    Orient::Left => end.offset(outer, 0.0),
                };
                out.push(Primitive::Line { from: end, to: cap, stroke: style.line, width: 1.0 });
            }
        }
        out
    }
}
