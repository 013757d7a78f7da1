// File: crates/timeline-core/src/config.rs
// Summary: Timeline configuration with defaults matching the reference chart layout.

use crate::theme::{Rgba, Theme};
use crate::types::{Insets, HEIGHT, TOOLTIP_PADDING, WIDTH};

/// Year range used by [`YearDomain::Fixed`] by default, and by
/// [`YearDomain::FitData`] when the active dataset is empty.
pub const DEFAULT_YEARS: (i32, i32) = (1980, 2017);

/// How the vertical (year) scale picks its domain.
///
/// Positions and axis ticks always share the same domain, so grid lines stay
/// aligned with glyph rows after filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearDomain {
    /// Inclusive year range, independent of the active dataset.
    Fixed { start: i32, end: i32 },
    /// Exact min/max year of the active dataset, recomputed on every update.
    FitData,
}

impl YearDomain {
    /// Domain to use before any data has been seen, or for an empty dataset.
    pub fn initial(&self) -> (i32, i32) {
        match *self {
            YearDomain::Fixed { start, end } => (start, end),
            YearDomain::FitData => DEFAULT_YEARS,
        }
    }
}

impl Default for YearDomain {
    fn default() -> Self {
        YearDomain::Fixed { start: DEFAULT_YEARS.0, end: DEFAULT_YEARS.1 }
    }
}

/// Semicircle styling shared by every glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub fill_opacity: f32,
    /// Overrides the theme's glyph stroke when set.
    pub stroke: Option<Rgba>,
    pub stroke_width: f32,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self { fill_opacity: 0.60, stroke: None, stroke_width: 0.3 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Container identifier; becomes the `id` of the SVG root.
    pub parent_element: String,
    pub container_width: u32,
    pub container_height: u32,
    pub margin: Insets,
    pub tooltip_padding: f32,
    /// Glyph radius in pixels for the cheapest and costliest record.
    pub radius_range: (f64, f64),
    /// Month axis domain; 13 is the right edge of December.
    pub month_domain: (f64, f64),
    pub year_domain: YearDomain,
    /// Day-of-year is divided by this before going through the month scale.
    pub day_divisor: f64,
    /// Vertical distance from a row's baseline to its label baseline.
    pub label_offset: f32,
    pub label_font_size: f32,
    pub axis_font_size: f32,
    pub glyph: GlyphStyle,
    pub show_legend: bool,
    pub theme: Theme,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            parent_element: "#vis".to_string(),
            container_width: WIDTH,
            container_height: HEIGHT,
            margin: Insets::default(),
            tooltip_padding: TOOLTIP_PADDING,
            radius_range: (4.0, 120.0),
            month_domain: (1.0, 13.0),
            year_domain: YearDomain::default(),
            day_divisor: 27.0,
            label_offset: 10.0,
            label_font_size: 11.0,
            axis_font_size: 10.0,
            glyph: GlyphStyle::default(),
            show_legend: true,
            theme: Theme::default(),
        }
    }
}

impl TimelineConfig {
    pub fn with_parent_element(mut self, id: impl Into<String>) -> Self {
        self.parent_element = id.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.container_width = width;
        self.container_height = height;
        self
    }

    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_year_domain(mut self, domain: YearDomain) -> Self {
        self.year_domain = domain;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Plot width inside the margins, never negative.
    pub fn inner_width(&self) -> f32 {
        (self.container_width as f32 - self.margin.hsum() as f32).max(0.0)
    }

    /// Plot height inside the margins, never negative.
    pub fn inner_height(&self) -> f32 {
        (self.container_height as f32 - self.margin.vsum() as f32).max(0.0)
    }

    pub fn glyph_stroke(&self) -> Rgba {
        self.glyph.stroke.unwrap_or(self.theme.glyph_stroke)
    }
}
