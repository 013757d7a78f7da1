// File: crates/timeline-core/src/view.rs
// Summary: Timeline chart view: scales, axes and the three-level year/record/glyph bind
// that turns the active dataset into a scene.

use std::collections::BTreeMap;

use tracing::debug;

use crate::axis::{Axis, AxisStyle};
use crate::config::{TimelineConfig, YearDomain};
use crate::geometry::{clamp, Point, RectF32, Semicircle};
use crate::layout::{cost_extent, costliest_by_year, group_indices_by_year, max_cost_by_year, x_position, year_extent};
use crate::record::DisasterRecord;
use crate::scale::{LinearScale, MonthScale, SqrtScale, YearScale};
use crate::scene::{Glyph, Label, Layer, Mark, Primitive, Scene, TextAnchor, TextBaseline};
use crate::theme::CategoryColors;

pub const X_AXIS_LAYER: &str = "x-axis";
pub const Y_AXIS_LAYER: &str = "y-axis";
pub const GLYPH_LAYER: &str = "circle-group";

/// Requested year-axis tick count.
const YEAR_TICKS: usize = 38;

/// Width of one tooltip text character, used to size the tooltip box.
const TOOLTIP_CHAR_PX: f32 = 6.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Rendered,
}

/// Hover overlay for one glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Top-left corner of the box.
    pub anchor: Point,
    pub title: String,
    pub body: String,
}

impl Tooltip {
    pub const TITLE_SIZE: f32 = 13.0;
    pub const BODY_SIZE: f32 = 12.0;

    /// Box size estimated from character counts.
    pub fn size(&self) -> (f32, f32) {
        let chars = self.title.chars().count().max(self.body.chars().count()) as f32;
        (chars * TOOLTIP_CHAR_PX + 20.0, 48.0)
    }

    /// Box and text, shifted to stay inside the canvas.
    pub fn primitives(&self, config: &TimelineConfig) -> Vec<Primitive> {
        let theme = &config.theme;
        let (w, h) = self.size();
        let max_x = (config.container_width as f32 - w).max(0.0);
        let max_y = (config.container_height as f32 - h).max(0.0);
        let x = clamp(self.anchor.x, 0.0, max_x);
        let y = clamp(self.anchor.y, 0.0, max_y);
        vec![
            Primitive::Rect {
                rect: RectF32::from_ltwh(x, y, w, h),
                fill: Some(theme.tooltip_bg),
                stroke: Some(theme.tooltip_border),
                stroke_width: 1.0,
            },
            Primitive::Text(Label {
                pos: Point::new(x + 10.0, y + 20.0),
                text: self.title.clone(),
                size: Self::TITLE_SIZE,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                fill: theme.tooltip_text,
            }),
            Primitive::Text(Label {
                pos: Point::new(x + 10.0, y + 38.0),
                text: self.body.clone(),
                size: Self::BODY_SIZE,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                fill: theme.tooltip_text,
            }),
        ]
    }
}

/// The chart view. Owns the working dataset and everything derived from it.
///
/// `init_vis` is the only way into [`Lifecycle::Rendered`]; calling it again
/// discards the previous scene and rebuilds from the current data.
pub struct TimelineView {
    config: TimelineConfig,
    data: Vec<DisasterRecord>,
    /// Cost extent of the dataset given at construction; filtering does not
    /// change glyph sizing.
    min_cost: f64,
    max_cost: f64,
    colors: CategoryColors,
    state: Lifecycle,

    inner_width: f32,
    inner_height: f32,
    month_scale: MonthScale,
    year_scale: YearScale,
    radius_scale: SqrtScale,
    month_axis: Axis,
    year_axis: Axis,
    clip: RectF32,

    groups: Vec<(i32, Vec<usize>)>,
    max_cost_by_year: BTreeMap<i32, f64>,
    costliest: BTreeMap<i32, usize>,
    scene: Scene,
}

impl TimelineView {
    /// Construct and fully initialize.
    pub fn new(config: TimelineConfig, data: Vec<DisasterRecord>) -> Self {
        let mut view = Self::uninitialized(config, data);
        view.init_vis();
        view
    }

    /// Store configuration and data without building scales or a scene.
    pub fn uninitialized(config: TimelineConfig, data: Vec<DisasterRecord>) -> Self {
        let (min_cost, max_cost) = cost_extent(&data).unwrap_or((0.0, 0.0));
        let empty_scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let scene = Scene::new(
            config.container_width,
            config.container_height,
            config.theme.background,
            config.parent_element.trim_start_matches('#'),
        );
        Self {
            min_cost,
            max_cost,
            colors: CategoryColors::standard(),
            state: Lifecycle::Uninitialized,
            inner_width: 0.0,
            inner_height: 0.0,
            month_scale: empty_scale,
            year_scale: empty_scale,
            radius_scale: SqrtScale::new((min_cost, max_cost), config.radius_range),
            month_axis: Axis::months(&empty_scale),
            year_axis: Axis::years(&empty_scale, 0.0, 0),
            clip: RectF32::default(),
            groups: Vec::new(),
            max_cost_by_year: BTreeMap::new(),
            costliest: BTreeMap::new(),
            scene,
            config,
            data,
        }
    }

    /// Build scales, axes and the clip region, reset the scene root, then
    /// [`update_vis`](Self::update_vis).
    pub fn init_vis(&mut self) {
        let cfg = &self.config;
        self.inner_width = cfg.inner_width();
        self.inner_height = cfg.inner_height();

        self.month_scale = LinearScale::new(cfg.month_domain, (0.0, self.inner_width as f64));
        self.month_axis = Axis::months(&self.month_scale);

        let (y0, y1) = cfg.year_domain.initial();
        self.year_scale = LinearScale::new((y0 as f64, y1 as f64), (self.inner_height as f64, 0.0));
        self.year_axis = Axis::years(&self.year_scale, self.inner_width, year_tick_count(y0, y1));

        self.radius_scale = SqrtScale::new((self.min_cost, self.max_cost), cfg.radius_range);

        // Spans the top margin: glyphs in the latest rows may rise above the plot.
        let m = cfg.margin;
        self.clip = RectF32::from_ltwh(
            m.left as f32,
            0.0,
            self.inner_width,
            cfg.container_height as f32,
        );

        let mut scene = Scene::new(
            cfg.container_width,
            cfg.container_height,
            cfg.theme.background,
            cfg.parent_element.trim_start_matches('#'),
        );
        scene.push_layer(Layer::new(X_AXIS_LAYER, None));
        scene.push_layer(Layer::new(Y_AXIS_LAYER, None));
        self.scene = scene;

        debug!(
            inner_width = self.inner_width,
            inner_height = self.inner_height,
            min_cost = self.min_cost,
            max_cost = self.max_cost,
            "timeline initialized"
        );
        self.update_vis();
    }

    /// Regroup the active data, refresh the per-year maps and the year domain,
    /// add a fresh glyph group, then [`render_vis`](Self::render_vis).
    pub fn update_vis(&mut self) {
        self.groups = group_indices_by_year(&self.data);
        self.max_cost_by_year = max_cost_by_year(&self.data);
        self.costliest = costliest_by_year(&self.data);

        if self.config.year_domain == YearDomain::FitData {
            let (y0, y1) = year_extent(&self.data).unwrap_or_else(|| self.config.year_domain.initial());
            self.year_scale.set_domain((y0 as f64, y1 as f64));
            self.year_axis = Axis::years(&self.year_scale, self.inner_width, year_tick_count(y0, y1));
            debug!(start = y0, end = y1, "year domain fitted to data");
        }

        self.scene.layers.retain(|l| l.name != GLYPH_LAYER);
        self.scene.glyphs.clear();
        self.scene.push_layer(Layer::new(GLYPH_LAYER, Some(self.clip)));
        self.render_vis();
    }

    /// Year rows, then one group per record (label + glyph), then both axes.
    pub fn render_vis(&mut self) {
        let cfg = &self.config;
        let origin = Point::new(cfg.margin.left as f32, cfg.margin.top as f32);
        let stroke = cfg.glyph_stroke();

        let mut items = Vec::with_capacity(self.data.len() * 2);
        let mut glyphs = Vec::with_capacity(self.data.len());
        for (year, members) in &self.groups {
            let row_y = origin.y + self.year_scale.map(*year as f64) as f32;
            for &idx in members {
                let rec = &self.data[idx];
                let x = origin.x + x_position(rec.mid, &self.month_scale, cfg.day_divisor);

                if self.costliest.get(year) == Some(&idx) {
                    items.push(Primitive::Text(Label {
                        pos: Point::new(x, row_y + cfg.label_offset),
                        text: rec.name.clone(),
                        size: cfg.label_font_size,
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Alphabetic,
                        fill: cfg.theme.text,
                    }));
                }

                let shape = Semicircle::new(Point::new(x, row_y), self.radius_scale.map(rec.cost) as f32);
                items.push(Primitive::Semicircle(Mark {
                    shape,
                    fill: self.colors.color(rec.category),
                    fill_opacity: cfg.glyph.fill_opacity,
                    stroke,
                    stroke_width: cfg.glyph.stroke_width,
                    title: Some(format!("{}\n{}", rec.name, rec.cost_label())),
                }));
                glyphs.push(Glyph {
                    shape,
                    record: idx,
                    name: rec.name.clone(),
                    cost: rec.cost,
                    clip: Some(self.clip),
                });
            }
        }

        let style = AxisStyle {
            line: cfg.theme.axis_line,
            grid: cfg.theme.grid,
            label: cfg.theme.tick_label,
            font_size: cfg.axis_font_size,
        };
        let x_axis = self.month_axis.primitives(origin, &style);
        let y_axis = self.year_axis.primitives(origin, &style);

        if let Some(layer) = self.scene.layer_mut(GLYPH_LAYER) {
            layer.items = items;
        }
        if let Some(layer) = self.scene.layer_mut(X_AXIS_LAYER) {
            layer.items = x_axis;
        }
        if let Some(layer) = self.scene.layer_mut(Y_AXIS_LAYER) {
            layer.items = y_axis;
        }
        debug!(glyphs = glyphs.len(), years = self.groups.len(), "timeline rendered");
        self.scene.glyphs = glyphs;
        self.state = Lifecycle::Rendered;
    }

    /// Replace the working dataset. Derived groups and glyphs are dropped and
    /// the view is [`Lifecycle::Uninitialized`] until the next
    /// [`init_vis`](Self::init_vis).
    pub fn set_data(&mut self, data: Vec<DisasterRecord>) {
        self.data = data;
        self.groups.clear();
        self.max_cost_by_year.clear();
        self.costliest.clear();
        self.scene.glyphs.clear();
        if let Some(layer) = self.scene.layer_mut(GLYPH_LAYER) {
            layer.items.clear();
        }
        self.state = Lifecycle::Uninitialized;
    }

    /// Tooltip for the glyph under `pointer`, offset by the configured padding.
    pub fn tooltip_at(&self, pointer: Point) -> Option<Tooltip> {
        let glyph = self.scene.glyph_at(pointer)?;
        let rec = self.data.get(glyph.record)?;
        let pad = self.config.tooltip_padding;
        Some(Tooltip {
            anchor: pointer.offset(pad, pad),
            title: rec.name.clone(),
            body: rec.cost_label(),
        })
    }

    pub fn render_svg(&self) -> String {
        crate::svg::render_svg(&self.scene)
    }

    pub fn config(&self) -> &TimelineConfig { &self.config }
    pub fn data(&self) -> &[DisasterRecord] { &self.data }
    pub fn state(&self) -> Lifecycle { self.state }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn colors(&self) -> &CategoryColors { &self.colors }
    pub fn month_scale(&self) -> &MonthScale { &self.month_scale }
    pub fn year_scale(&self) -> &YearScale { &self.year_scale }
    pub fn radius_scale(&self) -> &SqrtScale { &self.radius_scale }
    pub fn month_axis(&self) -> &Axis { &self.month_axis }
    pub fn year_axis(&self) -> &Axis { &self.year_axis }
    pub fn clip(&self) -> RectF32 { self.clip }
    pub fn cost_extent(&self) -> (f64, f64) { (self.min_cost, self.max_cost) }
    pub fn max_cost_by_year(&self) -> &BTreeMap<i32, f64> { &self.max_cost_by_year }

    /// Records that received a name label, in draw order.
    pub fn labelled(&self) -> Vec<&DisasterRecord> {
        self.groups
            .iter()
            .flat_map(|(_, members)| members.iter())
            .filter(|&&i| self.costliest.get(&self.data[i].year) == Some(&i))
            .map(|&i| &self.data[i])
            .collect()
    }
}

/// One tick per year up to [`YEAR_TICKS`]; wider spans get round-number steps.
fn year_tick_count(start: i32, end: i32) -> usize {
    let span = (i64::from(end) - i64::from(start)).unsigned_abs() + 1;
    span.min(YEAR_TICKS as u64) as usize
}
