// File: crates/timeline-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, tooltip offset).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 900;
/// Offset of the tooltip from the pointer, on both axes.
pub const TOOLTIP_PADDING: f32 = 15.0;

/// Screen margins around the plot, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// The top margin leaves room for the month axis and the legend row.
    fn default() -> Self {
        Self::new(45, 20, 106, 20)
    }
}
