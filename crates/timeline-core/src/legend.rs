// File: crates/timeline-core/src/legend.rs
// Summary: Category legend (toggle state, layout, hit testing) and category filtering.

use crate::config::TimelineConfig;
use crate::geometry::{Point, RectF32};
use crate::record::{Category, DisasterRecord};
use crate::scene::{Label, Primitive, TextAnchor, TextBaseline};
use crate::theme::{CategoryColors, Theme};

const ROW_TOP: f32 = 14.0;
const ROW_HEIGHT: f32 = 18.0;
const SWATCH: f32 = 12.0;
const FONT_SIZE: f32 = 11.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub active: bool,
    /// Click target: swatch plus label.
    pub bounds: RectF32,
}

/// One entry per category laid out in a row above the month axis, all active
/// initially.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(config: &TimelineConfig) -> Self {
        let left = config.margin.left as f32;
        let slot = config.inner_width() / Category::ALL.len() as f32;
        let entries = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, &category)| LegendEntry {
                category,
                active: true,
                bounds: RectF32::from_ltwh(left + slot * i as f32, ROW_TOP, slot, ROW_HEIGHT),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Flip one entry between active and inactive.
    pub fn toggle(&mut self, category: Category) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.category == category) {
            e.active = !e.active;
        }
    }

    pub fn set_active(&mut self, category: Category, active: bool) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.category == category) {
            e.active = active;
        }
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.entries.iter().any(|e| e.category == category && e.active)
    }

    /// Active categories in legend order.
    pub fn active_categories(&self) -> Vec<Category> {
        self.entries.iter().filter(|e| e.active).map(|e| e.category).collect()
    }

    pub fn hit(&self, p: Point) -> Option<Category> {
        self.entries.iter().find(|e| e.bounds.contains(p)).map(|e| e.category)
    }

    /// Swatch and label per entry; inactive entries are drawn dimmed.
    pub fn primitives(&self, theme: &Theme, colors: &CategoryColors) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(self.entries.len() * 2);
        for e in &self.entries {
            let b = e.bounds;
            let swatch_top = b.top + (ROW_HEIGHT - SWATCH) * 0.5;
            let (fill, text) = if e.active {
                (colors.color(e.category), theme.text)
            } else {
                (colors.color(e.category).with_opacity(0.25), theme.legend_inactive)
            };
            out.push(Primitive::Rect {
                rect: RectF32::from_ltwh(b.left, swatch_top, SWATCH, SWATCH),
                fill: Some(fill),
                stroke: Some(theme.glyph_stroke),
                stroke_width: 0.5,
            });
            out.push(Primitive::Text(Label {
                pos: Point::new(b.left + SWATCH + 6.0, b.top + ROW_HEIGHT * 0.5),
                text: e.category.label().to_string(),
                size: FONT_SIZE,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: text,
            }));
        }
        out
    }
}

/// Records whose category is in `active`, input order preserved.
pub fn filter_records(all: &[DisasterRecord], active: &[Category]) -> Vec<DisasterRecord> {
    all.iter().filter(|r| active.contains(&r.category)).cloned().collect()
}
