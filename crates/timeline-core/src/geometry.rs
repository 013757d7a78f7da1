// File: crates/timeline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the semicircle glyph shape.

use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Half-disc glyph: an arc with inner radius 0 sweeping from -90 to +90 degrees,
/// angles measured clockwise from 12 o'clock. The flat edge sits on `center.y`
/// and the dome rises above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Semicircle {
    pub center: Point,
    pub radius: f32,
}

impl Semicircle {
    pub const START_ANGLE: f32 = -FRAC_PI_2;
    pub const END_ANGLE: f32 = FRAC_PI_2;

    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    /// Point on the arc at `angle` (radians, 0 = 12 o'clock, clockwise).
    fn point_at(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius * angle.sin(),
            self.center.y - self.radius * angle.cos(),
        )
    }

    /// Absolute SVG path data: outer arc then back through the centre.
    pub fn svg_path(&self) -> String {
        let start = self.point_at(Self::START_ANGLE);
        let end = self.point_at(Self::END_ANGLE);
        let r = self.radius;
        format!(
            "M{:.3},{:.3}A{r:.3},{r:.3},0,1,1,{:.3},{:.3}L{:.3},{:.3}Z",
            start.x, start.y, end.x, end.y, self.center.x, self.center.y
        )
    }

    /// Polygon approximation of the outline, closed through the centre.
    /// Returns `segments + 2` points.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let sweep = Self::END_ANGLE - Self::START_ANGLE;
        let mut pts = Vec::with_capacity(segments + 2);
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            pts.push(self.point_at(Self::START_ANGLE + sweep * t));
        }
        pts.push(self.center);
        pts
    }

    pub fn area(&self) -> f32 {
        0.5 * PI * self.radius * self.radius
    }

    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dy <= 0.0 && dx * dx + dy * dy <= self.radius * self.radius
    }
}
