//! Per-box interaction state machine.
//!
//! ```text
//!   Idle ──drag start (armed by handle press)──▶ Dragging ──drop──▶ Idle
//! ```
//!
//! Pointer-down is resolved in a fixed order: delete zone, then action
//! zone, then handle. Only a press on the handle arms the box; a drag start
//! on an unarmed box is rejected, which keeps text selection inside the
//! body from moving the box.

use ib_core::geom::{Point, Vector};
use ib_core::model::{DragState, Hover};
use ib_core::{Anchor, BoardConfig, BoxNode, DragRequest};

/// What a pointer-down on a box asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Press {
    /// Delete zone: remove the box immediately.
    Delete,
    /// Action zone: start a wire from this anchor. The box state is untouched.
    ConnectStart(Anchor),
    /// Handle: the box may now be dragged.
    Armed,
    /// Anywhere else on the box.
    Plain,
}

pub trait BoxGestures {
    /// Resolve a pointer-down at `(x, y)`. `on_handle` tells whether the
    /// press target was the drag handle.
    fn press(&mut self, x: f32, y: f32, on_handle: bool, config: &BoardConfig) -> Press;

    /// Enter `Dragging` if the last press armed the box. Returns `None`
    /// when the drag must be rejected.
    fn begin_drag(&mut self, x: f32, y: f32) -> Option<DragRequest>;

    /// Follow the pointer during a drag. Returns `false` when not dragging.
    fn track(&mut self, x: f32, y: f32) -> bool;

    /// Drop at `(x, y)`: commit the new position and return the
    /// displacement. A drop without a drag in progress is a no-op.
    fn drop_at(&mut self, x: f32, y: f32) -> Option<Vector>;

    /// Abandon a drag whose drop never arrived. The box keeps its position.
    fn cancel_drag(&mut self) -> bool;

    /// Anchor for a wire end if `(x, y)` is in this box's action zone.
    fn release_anchor(&self, x: f32, y: f32, config: &BoardConfig) -> Option<Anchor>;

    /// Update hover feedback. Returns `true` if the look changed.
    fn hover(&mut self, x: f32, y: f32, on_handle: bool, config: &BoardConfig) -> bool;

    /// Pointer left the box: back to the default look.
    fn leave(&mut self) -> bool;
}

impl BoxGestures for BoxNode {
    fn press(&mut self, x: f32, y: f32, on_handle: bool, config: &BoardConfig) -> Press {
        self.armed = false;
        if self.in_delete_zone(x, y, config.delete_zone_margin) {
            return Press::Delete;
        }
        if self.in_action_zone(x, y, config.action_zone_margin) {
            return Press::ConnectStart(self.anchor());
        }
        if on_handle {
            self.armed = true;
            return Press::Armed;
        }
        Press::Plain
    }

    fn begin_drag(&mut self, x: f32, y: f32) -> Option<DragRequest> {
        if !self.armed || self.is_dragging() {
            return None;
        }
        let pointer = Point::new(x, y);
        let grab = Vector::between(self.rect.origin(), pointer);
        self.drag = DragState::Dragging { grab, pointer };
        Some(DragRequest {
            origin_id: self.id,
            grab_offset: grab,
        })
    }

    fn track(&mut self, x: f32, y: f32) -> bool {
        match &mut self.drag {
            DragState::Dragging { pointer, .. } => {
                *pointer = Point::new(x, y);
                true
            }
            DragState::Idle => false,
        }
    }

    fn drop_at(&mut self, x: f32, y: f32) -> Option<Vector> {
        let DragState::Dragging { grab, .. } = self.drag else {
            return None;
        };
        let old = self.rect.origin();
        let new = Point::new(x - grab.dx, y - grab.dy);
        self.move_to(new.x, new.y);
        self.drag = DragState::Idle;
        self.armed = false;
        Some(Vector::between(old, new))
    }

    fn cancel_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.drag = DragState::Idle;
        self.armed = false;
        true
    }

    fn release_anchor(&self, x: f32, y: f32, config: &BoardConfig) -> Option<Anchor> {
        self.in_action_zone(x, y, config.action_zone_margin)
            .then(|| self.anchor())
    }

    fn hover(&mut self, x: f32, y: f32, on_handle: bool, config: &BoardConfig) -> bool {
        if on_handle || self.is_dragging() {
            return false;
        }
        let next = Hover {
            border_hot: self.in_action_zone(x, y, config.action_zone_margin),
            fill_hot: self.in_delete_zone(x, y, config.delete_zone_margin),
        };
        let changed = next != self.hover;
        self.hover = next;
        changed
    }

    fn leave(&mut self) -> bool {
        let changed = self.hover != Hover::default();
        self.hover = Hover::default();
        changed
    }
}
