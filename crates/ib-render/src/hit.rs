//! Hit testing: point → box lookup.
//!
//! Walks boxes back to front (last created = topmost) to find which box,
//! and which part of it, is at a given canvas position.

use ib_core::{BoxId, BoxNode};

/// Which part of a box was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The drag handle attached to the box.
    Handle,
    /// The box body (content and zones).
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub box_id: BoxId,
    pub part: HitPart,
}

/// Find the topmost box part at `(px, py)`.
/// Returns `None` if the point is on empty canvas.
pub fn hit_test(boxes: &[BoxNode], px: f32, py: f32, handle_size: f32) -> Option<Hit> {
    boxes.iter().rev().find_map(|node| {
        let part = if node.on_handle(px, py, handle_size) {
            HitPart::Handle
        } else if node.contains_point(px, py) {
            HitPart::Body
        } else {
            return None;
        };
        Some(Hit {
            box_id: node.id,
            part,
        })
    })
}

/// Topmost box whose body contains `(px, py)`; handles are ignored.
pub fn body_at(boxes: &[BoxNode], px: f32, py: f32) -> Option<&BoxNode> {
    boxes.iter().rev().find(|node| node.contains_point(px, py))
}
