//! Board data model: boxes (content nodes) and wires (directed links).
//!
//! Boxes are owned by the box manager; wires are owned by the wire manager
//! and refer to boxes by `BoxId` only. A wire caches the coordinates of
//! both endpoints. Those caches are kept in step with box positions by
//! explicit delta propagation, never by looking the box up again.

use crate::error::{BoardError, Result};
use crate::geom::{self, Point, Rect, Vector};
use crate::id::{BoxId, WireId};
use serde::{Deserialize, Serialize};

// ─── Boxes ───────────────────────────────────────────────────────────────

/// Drag phase of a single box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragged by its handle; position is committed only on drop.
    Dragging {
        /// Pointer position minus box top-left at drag start.
        grab: Vector,
        /// Last tracked pointer position.
        pointer: Point,
    },
}

/// Hover feedback. Purely visual, not part of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hover {
    /// Pointer is in the action zone: border is highlighted.
    pub border_hot: bool,
    /// Pointer is in the delete zone: fill is highlighted.
    pub fill_hot: bool,
}

/// A positioned, sized, content-bearing rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxNode {
    pub id: BoxId,
    pub rect: Rect,
    pub content: String,
    pub drag: DragState,
    /// Set when the last pointer-down on this box landed on its handle.
    pub armed: bool,
    pub hover: Hover,
}

impl BoxNode {
    pub fn new(id: BoxId, rect: Rect, content: impl Into<String>) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(rect.width) || !valid(rect.height) {
            return Err(BoardError::InvalidSize {
                id,
                width: rect.width,
                height: rect.height,
            });
        }
        if !rect.origin().is_finite() {
            return Err(BoardError::InvalidPosition {
                id,
                x: rect.x,
                y: rect.y,
            });
        }
        Ok(Self {
            id,
            rect,
            content: content.into(),
            drag: DragState::Idle,
            armed: false,
            hover: Hover::default(),
        })
    }

    pub fn is(&self, id: BoxId) -> bool {
        self.id == id
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        geom::contains_point(&self.rect, px, py)
    }

    pub fn in_action_zone(&self, px: f32, py: f32, margin: f32) -> bool {
        geom::in_action_zone(&self.rect, px, py, margin)
    }

    pub fn in_delete_zone(&self, px: f32, py: f32, margin: f32) -> bool {
        geom::in_delete_zone(&self.rect, px, py, margin)
    }

    pub fn on_handle(&self, px: f32, py: f32, handle_size: f32) -> bool {
        geom::on_handle(&self.rect, px, py, handle_size)
    }

    /// Where wires attach to this box: its centre.
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.id, self.rect.center())
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

// ─── Wires ───────────────────────────────────────────────────────────────

/// One endpoint request of the two-phase connect protocol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: BoxId,
    #[serde(flatten)]
    pub point: Point,
}

impl Anchor {
    pub fn new(id: BoxId, point: Point) -> Self {
        Self { id, point }
    }

    /// A usable anchor names a box and has finite coordinates.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.point.is_finite()
    }
}

/// A directed link from one box to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: WireId,
    pub start_id: BoxId,
    pub end_id: BoxId,
    pub start_point: Point,
    pub end_point: Point,
}

impl Wire {
    pub fn new(id: WireId, start: Anchor, end: Anchor) -> Self {
        Self {
            id,
            start_id: start.id,
            end_id: end.id,
            start_point: start.point,
            end_point: end.point,
        }
    }

    /// Translate every endpoint that belongs to box `id`.
    ///
    /// Start and end are checked independently, so a wire whose two ends
    /// both name `id` moves both of them. Returns how many ends moved.
    pub fn update(&mut self, id: BoxId, dx: f32, dy: f32) -> usize {
        let mut moved = 0;
        if self.start_id == id {
            self.start_point.translate(dx, dy);
            moved += 1;
        }
        if self.end_id == id {
            self.end_point.translate(dx, dy);
            moved += 1;
        }
        moved
    }

    /// True iff either endpoint refers to box `id`.
    pub fn has(&self, id: BoxId) -> bool {
        self.start_id == id || self.end_id == id
    }
}

/// Gesture context captured when a drag starts and consumed on drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRequest {
    pub origin_id: BoxId,
    pub grab_offset: Vector,
}
