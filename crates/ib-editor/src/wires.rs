//! Wire manager: owns every wire and runs the two-phase connect protocol.
//!
//! A wire is created by a start request (pointer-down in a box's action
//! zone) followed by an end request on a *different* box (pointer-up in its
//! action zone). At most one start is pending; a new start replaces it.
//!
//! Wires cache their endpoint coordinates. When a box moves, its delta is
//! pushed through [`WireManager::propagate_move`]; when a box is deleted,
//! [`WireManager::remove_all_referencing`] drops every wire touching it.

use ib_core::{Anchor, BoxId, Wire, WireId};
use ib_render::paint::paint_wire;
use ib_render::{RenderSink, Visual};

#[derive(Debug, Default)]
pub struct WireManager {
    wires: Vec<Wire>,
    pending: Option<Anchor>,
    next_id: u64,
}

impl WireManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase one: remember `anchor` as the pending start, replacing any
    /// earlier one. Malformed anchors are ignored. Returns whether the
    /// anchor was accepted.
    pub fn request_connection_start(&mut self, anchor: Anchor) -> bool {
        if !anchor.is_valid() {
            log::debug!("ignoring malformed wire start {anchor:?}");
            return false;
        }
        if let Some(prev) = self.pending.replace(anchor) {
            log::debug!("wire start {} replaced by {}", prev.id, anchor.id);
        }
        true
    }

    /// Phase two: complete the pending start with `anchor`.
    ///
    /// The pending start is consumed by any well-formed end request. A
    /// wire is committed only when the ends name different boxes; a
    /// self-loop or an end without a start creates nothing.
    pub fn request_connection_end(
        &mut self,
        anchor: Anchor,
        sink: &mut dyn RenderSink,
    ) -> Option<WireId> {
        if !anchor.is_valid() {
            log::debug!("ignoring malformed wire end {anchor:?}");
            return None;
        }
        let Some(start) = self.pending.take() else {
            log::debug!("wire end on {} without a pending start", anchor.id);
            return None;
        };
        if start.id == anchor.id {
            log::debug!("rejecting self-loop wire on {}", anchor.id);
            return None;
        }

        let id = WireId(self.next_id);
        self.next_id += 1;
        log::info!("wire {id}: {} -> {}", start.id, anchor.id);
        self.wires.push(Wire::new(id, start, anchor));
        self.render(sink);
        Some(id)
    }

    /// Drop the pending start without creating a wire.
    pub fn cancel_pending(&mut self) -> Option<Anchor> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&Anchor> {
        self.pending.as_ref()
    }

    /// Translate every cached endpoint that belongs to box `id` by
    /// `(dx, dy)` and redraw the affected wires. Returns the number of
    /// endpoints moved; unknown ids move nothing.
    pub fn propagate_move(&mut self, id: BoxId, dx: f32, dy: f32, sink: &mut dyn RenderSink) -> usize {
        let mut moved = 0;
        for wire in &mut self.wires {
            let n = wire.update(id, dx, dy);
            if n > 0 {
                sink.draw_wire(paint_wire(wire));
                moved += n;
            }
        }
        moved
    }

    /// Remove every wire with an end on box `id`, detaching them from the
    /// surface. A pending start on that box is dropped as well, so no wire
    /// can be completed towards a box that no longer exists.
    pub fn remove_all_referencing(&mut self, id: BoxId, sink: &mut dyn RenderSink) -> Vec<Wire> {
        let (removed, kept): (Vec<Wire>, Vec<Wire>) =
            std::mem::take(&mut self.wires).into_iter().partition(|w| w.has(id));
        self.wires = kept;
        for wire in &removed {
            sink.unmount(Visual::Wire(wire.id));
        }
        if self.pending.is_some_and(|p| p.id == id) {
            self.pending = None;
        }
        if !removed.is_empty() {
            log::info!("removed {} wire(s) referencing {id}", removed.len());
        }
        removed
    }

    /// Ensure every wire is mounted; newly mounted wires are drawn once.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for wire in &self.wires {
            if sink.mount(Visual::Wire(wire.id)) {
                sink.draw_wire(paint_wire(wire));
            }
        }
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn get(&self, id: WireId) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}
