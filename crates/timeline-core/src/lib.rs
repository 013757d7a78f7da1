// File: crates/timeline-core/src/lib.rs
// Summary: Core library entry point; exports the timeline view, data model and scene API.

pub mod app;
pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod loader;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use app::{AppState, Event, Redraw};
pub use axis::{Axis, Orient, Tick};
pub use config::{GlyphStyle, TimelineConfig, YearDomain};
pub use error::{LoadError, RecordError, TimelineError};
pub use geometry::{Point, RectF32, Semicircle};
pub use legend::{filter_records, Legend};
pub use loader::{load_csv, read_csv};
pub use record::{Category, DisasterRecord};
pub use scale::{LinearScale, SqrtScale};
pub use scene::{Glyph, Label, Layer, Mark, Primitive, Renderer, Scene, TextAnchor, TextBaseline};
pub use svg::{render_svg, write_svg};
pub use theme::{CategoryColors, Rgba, Theme};
pub use types::Insets;
pub use view::{Lifecycle, TimelineView, Tooltip};
