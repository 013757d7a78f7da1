// File: crates/timeline-core/src/theme.rs
// Summary: Light/Dark theming and the fixed category colour mapping.

use crate::record::Category;

/// Backend-neutral 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale alpha by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Ordinal colour scale over [`Category::ALL`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryColors {
    colors: [Rgba; 5],
}

impl CategoryColors {
    pub const fn standard() -> Self {
        Self {
            colors: [
                Rgba::rgb(0xcc, 0xcc, 0xcc), // winter-storm-freeze
                Rgba::rgb(0xff, 0xff, 0xd9), // drought-wildfire
                Rgba::rgb(0x41, 0xb6, 0xc4), // flooding
                Rgba::rgb(0x08, 0x1d, 0x58), // tropical-cyclone
                Rgba::rgb(0xc7, 0xe9, 0xb4), // severe-storm
            ],
        }
    }

    pub fn color(&self, category: Category) -> Rgba {
        self.colors[category.index()]
    }
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    /// Glyph labels and legend text.
    pub text: Rgba,
    pub axis_line: Rgba,
    pub grid: Rgba,
    pub tick_label: Rgba,
    pub glyph_stroke: Rgba,
    pub legend_inactive: Rgba,
    pub tooltip_bg: Rgba,
    pub tooltip_border: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            text: Rgba::rgb(0x33, 0x33, 0x33),
            axis_line: Rgba::rgb(0x33, 0x33, 0x33),
            grid: Rgba::rgb(0xdd, 0xdd, 0xdd),
            tick_label: Rgba::rgb(0x33, 0x33, 0x33),
            glyph_stroke: Rgba::rgb(0x33, 0x33, 0x33),
            legend_inactive: Rgba::rgb(0xbb, 0xbb, 0xbb),
            tooltip_bg: Rgba::rgb(255, 255, 255),
            tooltip_border: Rgba::rgb(0xd0, 0xd0, 0xd0),
            tooltip_text: Rgba::rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            text: Rgba::rgb(235, 235, 245),
            axis_line: Rgba::rgb(180, 180, 190),
            grid: Rgba::rgb(40, 40, 45),
            tick_label: Rgba::rgb(150, 150, 160),
            glyph_stroke: Rgba::rgb(210, 210, 220),
            legend_inactive: Rgba::rgb(90, 90, 100),
            tooltip_bg: Rgba::rgb(32, 32, 36),
            tooltip_border: Rgba::rgb(80, 80, 90),
            tooltip_text: Rgba::rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
