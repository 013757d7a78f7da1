// File: crates/timeline-core/src/app.rs
// Summary: Application state for interactive front ends: legend filtering and hover tooltips.

use tracing::info;

use crate::config::TimelineConfig;
use crate::geometry::Point;
use crate::legend::{filter_records, Legend};
use crate::record::{Category, DisasterRecord};
use crate::scene::{Layer, Scene};
use crate::view::{TimelineView, Tooltip};

pub const LEGEND_LAYER: &str = "legend";
pub const TOOLTIP_LAYER: &str = "tooltip";

/// Input from the host, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Click(Point),
    PointerMove(Point),
    PointerLeave,
    ToggleCategory(Category),
}

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Idle,
    Needed,
}

/// Full dataset, legend and view. Only this type replaces the view's data.
pub struct AppState {
    all: Vec<DisasterRecord>,
    legend: Legend,
    view: TimelineView,
    tooltip: Option<Tooltip>,
}

impl AppState {
    pub fn new(config: TimelineConfig, all: Vec<DisasterRecord>) -> Self {
        let legend = Legend::new(&config);
        let view = TimelineView::new(config, all.clone());
        Self { all, legend, view, tooltip: None }
    }

    pub fn handle(&mut self, event: Event) -> Redraw {
        match event {
            Event::Click(p) => {
                if !self.view.config().show_legend {
                    return Redraw::Idle;
                }
                match self.legend.hit(p) {
                    Some(category) => {
                        self.toggle(category);
                        Redraw::Needed
                    }
                    None => Redraw::Idle,
                }
            }
            Event::ToggleCategory(category) => {
                self.toggle(category);
                Redraw::Needed
            }
            Event::PointerMove(p) => {
                let next = self.view.tooltip_at(p);
                if next == self.tooltip {
                    Redraw::Idle
                } else {
                    self.tooltip = next;
                    Redraw::Needed
                }
            }
            Event::PointerLeave => match self.tooltip.take() {
                Some(_) => Redraw::Needed,
                None => Redraw::Idle,
            },
        }
    }

    /// Toggle a legend entry, refilter the full dataset and rebuild the view.
    pub fn toggle(&mut self, category: Category) {
        self.legend.toggle(category);
        self.apply_filter();
        info!(
            %category,
            active = self.legend.is_active(category),
            records = self.view.data().len(),
            "legend toggled"
        );
    }

    /// Mark categories hidden without a per-toggle rebuild.
    pub fn hide(&mut self, categories: &[Category]) {
        for &c in categories {
            self.legend.set_active(c, false);
        }
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let active = self.legend.active_categories();
        self.view.set_data(filter_records(&self.all, &active));
        self.view.init_vis();
        self.tooltip = None;
    }

    /// The view's scene plus legend and tooltip overlays.
    pub fn frame(&self) -> Scene {
        let config = self.view.config();
        let mut scene = self.view.scene().clone();
        if config.show_legend {
            let items = self.legend.primitives(&config.theme, self.view.colors());
            scene.push_layer(Layer::new(LEGEND_LAYER, None).with_items(items));
        }
        if let Some(t) = &self.tooltip {
            scene.push_layer(Layer::new(TOOLTIP_LAYER, None).with_items(t.primitives(config)));
        }
        scene
    }

    pub fn legend(&self) -> &Legend { &self.legend }
    pub fn view(&self) -> &TimelineView { &self.view }
    pub fn tooltip(&self) -> Option<&Tooltip> { self.tooltip.as_ref() }
    pub fn all_records(&self) -> &[DisasterRecord] { &self.all }
}
