//! Box manager: owns every box on the board.
//!
//! Boxes are kept in creation order, which is both the export order and the
//! stacking order (last created is on top). Deleting a box cascades to the
//! wire manager before returning, so no wire ever names a missing box.

use crate::entity::BoxGestures;
use crate::wires::WireManager;
use ib_core::{BoardConfig, BoardError, BoardSnapshot, BoxId, BoxNode, Point, Rect, Result, Vector};
use ib_render::paint::paint_box;
use ib_render::{RenderSink, Visual};
use std::collections::HashSet;

#[derive(Debug)]
pub struct BoxManager {
    boxes: Vec<BoxNode>,
    /// Every id used this session, including deleted boxes.
    issued: HashSet<BoxId>,
    next_seq: u64,
    handle_size: f32,
}

/// Result of dropping a dragged box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moved {
    pub id: BoxId,
    pub delta: Vector,
    /// Wire endpoints translated by the move.
    pub wire_ends: usize,
}

impl BoxManager {
    pub fn new(handle_size: f32) -> Self {
        Self {
            boxes: Vec::new(),
            issued: HashSet::new(),
            next_seq: 0,
            handle_size,
        }
    }

    /// Next generated id (`box-<n>`) never used in this session.
    pub fn next_id(&mut self) -> BoxId {
        loop {
            let id = BoxId::numbered(self.next_seq);
            self.next_seq += 1;
            if !self.issued.contains(&id) {
                return id;
            }
        }
    }

    /// Add a box and render. Ids cannot be reused within a session.
    pub fn create(&mut self, node: BoxNode, sink: &mut dyn RenderSink) -> Result<BoxId> {
        let id = node.id;
        if !self.issued.insert(id) {
            return Err(BoardError::DuplicateId(id));
        }
        log::info!("box {id} created at ({}, {})", node.rect.x, node.rect.y);
        self.boxes.push(node);
        self.render(sink);
        Ok(id)
    }

    /// Create a default box for a double-activation at `at`.
    ///
    /// The box is placed so that its handle is centred on `at`.
    pub fn create_at(&mut self, at: Point, config: &BoardConfig, sink: &mut dyn RenderSink) -> Result<BoxId> {
        let half = config.handle_size / 2.0;
        let rect = Rect::new(at.x + half, at.y - half, config.width, config.height);
        let id = self.next_id();
        let node = BoxNode::new(id, rect, config.default_content.clone())?;
        self.create(node, sink)
    }

    /// Ensure every box is mounted; newly mounted boxes are drawn once.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for node in &self.boxes {
            if sink.mount(Visual::Box(node.id)) {
                sink.draw_box(paint_box(node, self.handle_size));
            }
        }
    }

    /// Redraw one box after its position or look changed.
    pub fn redraw(&self, id: BoxId, sink: &mut dyn RenderSink) {
        if let Some(node) = self.get(id) {
            sink.draw_box(paint_box(node, self.handle_size));
        }
    }

    /// True iff any box body contains `(x, y)`.
    pub fn hit_test_any(&self, x: f32, y: f32) -> bool {
        self.boxes.iter().any(|b| b.contains_point(x, y))
    }

    /// Remove box `id` and every wire referencing it.
    ///
    /// The wire cleanup runs even for an unknown id, which keeps the
    /// referential invariant no matter what the caller passes.
    pub fn delete(&mut self, id: BoxId, wires: &mut WireManager, sink: &mut dyn RenderSink) -> Option<BoxNode> {
        let removed = match self.boxes.iter().position(|b| b.is(id)) {
            Some(pos) => {
                sink.unmount(Visual::Box(id));
                log::info!("box {id} deleted");
                Some(self.boxes.remove(pos))
            }
            None => {
                log::debug!("delete of unknown box {id}");
                None
            }
        };
        wires.remove_all_referencing(id, sink);
        removed
    }

    /// Drop box `id` at `(x, y)` and push its displacement to the wires.
    /// `None` when that box is unknown or not being dragged.
    pub fn drop_box(
        &mut self,
        id: BoxId,
        x: f32,
        y: f32,
        wires: &mut WireManager,
        sink: &mut dyn RenderSink,
    ) -> Option<Moved> {
        let delta = self.get_mut(id)?.drop_at(x, y)?;
        self.redraw(id, sink);
        let wire_ends = wires.propagate_move(id, delta.dx, delta.dy, sink);
        log::debug!("box {id} moved by ({}, {})", delta.dx, delta.dy);
        Some(Moved {
            id,
            delta,
            wire_ends,
        })
    }

    /// Replace the text of box `id`. Returns `false` for unknown ids.
    pub fn set_content(&mut self, id: BoxId, content: impl Into<String>, sink: &mut dyn RenderSink) -> bool {
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        node.content = content.into();
        self.redraw(id, sink);
        true
    }

    /// Abandon the drag of box `id` and restore its look.
    pub fn cancel_drag(&mut self, id: BoxId, sink: &mut dyn RenderSink) -> bool {
        if !self.get_mut(id).is_some_and(|node| node.cancel_drag()) {
            return false;
        }
        log::debug!("drag of box {id} abandoned");
        self.redraw(id, sink);
        true
    }

    /// All boxes in creation order.
    pub fn list(&self) -> &[BoxNode] {
        &self.boxes
    }

    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.boxes.iter().find(|b| b.is(id))
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut BoxNode> {
        self.boxes.iter_mut().find(|b| b.is(id))
    }

    pub fn contains(&self, id: BoxId) -> bool {
        self.get(id).is_some()
    }

    pub fn export(&self) -> BoardSnapshot {
        BoardSnapshot::from_boxes(&self.boxes)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
