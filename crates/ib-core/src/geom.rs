//! Canvas geometry and the zone predicates used for pointer hit testing.
//!
//! All coordinates are canvas space (already translated from the viewport
//! by the host). Zone tests are strict: a point lying exactly on a zone
//! boundary is outside the zone.

use serde::{Deserialize, Serialize};

/// A position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A displacement between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f32,
    pub dy: f32,
}

impl Vector {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Displacement that takes `from` to `to`.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
        }
    }
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        contains_point(self, px, py)
    }
}

/// True iff `(px, py)` lies strictly inside `rect`.
pub fn contains_point(rect: &Rect, px: f32, py: f32) -> bool {
    px > rect.x && px < rect.right() && py > rect.y && py < rect.bottom()
}

/// True iff the point lies within `margin` of any of the four edges.
///
/// Each edge band is sufficient on its own, so corners (near two edges)
/// count as well. Bands only extend inward: points outside `rect` are never
/// in the action zone.
pub fn in_action_zone(rect: &Rect, px: f32, py: f32, margin: f32) -> bool {
    if !contains_point(rect, px, py) {
        return false;
    }
    let near_left = px > rect.x && px < rect.x + margin;
    let near_right = px < rect.right() && px > rect.right() - margin;
    let near_top = py > rect.y && py < rect.y + margin;
    let near_bottom = py < rect.bottom() && py > rect.bottom() - margin;
    near_left || near_right || near_top || near_bottom
}

/// True iff the point lies in the top-right `margin × margin` corner square.
pub fn in_delete_zone(rect: &Rect, px: f32, py: f32, margin: f32) -> bool {
    px > rect.right() - margin && px < rect.right() && py > rect.y && py < rect.y + margin
}

/// The drag handle of a box: a `size × size` square attached to the
/// outside of the left edge, aligned with the top.
pub fn handle_rect(rect: &Rect, size: f32) -> Rect {
    Rect::new(rect.x - size, rect.y, size, size)
}

/// True iff the point lies strictly inside the drag handle of `rect`.
pub fn on_handle(rect: &Rect, px: f32, py: f32, size: f32) -> bool {
    contains_point(&handle_rect(rect, size), px, py)
}
