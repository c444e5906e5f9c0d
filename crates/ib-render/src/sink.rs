//! The contract between the board core and the display surface.
//!
//! Managers ask the sink to *ensure* a visual is mounted; a sink must treat
//! a repeated mount of an already-mounted visual as a no-op. Drawing
//! requests carry full paint descriptions so the sink never has to look
//! back into the model.

use crate::paint::{BoxPaint, WirePaint};
use ib_core::{BoxId, WireId};
use serde::Serialize;
use std::collections::HashSet;

/// A visual element on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Visual {
    Box(BoxId),
    Wire(WireId),
}

pub trait RenderSink {
    /// Attach `visual` to the surface. Returns `false` if it was already
    /// mounted, in which case nothing happens.
    fn mount(&mut self, visual: Visual) -> bool;

    /// Detach `visual`. Returns `false` if it was not mounted.
    fn unmount(&mut self, visual: Visual) -> bool;

    fn is_mounted(&self, visual: Visual) -> bool;

    /// Redraw a box with its current geometry and look.
    fn draw_box(&mut self, paint: BoxPaint);

    /// Redraw a wire from its cached endpoints.
    fn draw_wire(&mut self, paint: WirePaint);
}

/// One operation applied to a [`MountRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SinkOp {
    Mount { visual: Visual },
    Unmount { visual: Visual },
    DrawBox { paint: BoxPaint },
    DrawWire { paint: WirePaint },
}

/// In-memory sink: tracks mounted visuals and journals every effective
/// operation for a host (or a test) to replay.
#[derive(Debug, Default)]
pub struct MountRegistry {
    mounted: HashSet<Visual>,
    /// Mount order of the visuals still mounted.
    order: Vec<Visual>,
    journal: Vec<SinkOp>,
}

impl MountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounted visuals, oldest first.
    pub fn mounted(&self) -> &[Visual] {
        &self.order
    }

    pub fn journal(&self) -> &[SinkOp] {
        &self.journal
    }

    /// Take the journal, leaving it empty.
    pub fn drain(&mut self) -> Vec<SinkOp> {
        std::mem::take(&mut self.journal)
    }
}

impl RenderSink for MountRegistry {
    fn mount(&mut self, visual: Visual) -> bool {
        if !self.mounted.insert(visual) {
            return false;
        }
        self.order.push(visual);
        self.journal.push(SinkOp::Mount { visual });
        true
    }

    fn unmount(&mut self, visual: Visual) -> bool {
        if !self.mounted.remove(&visual) {
            return false;
        }
        self.order.retain(|v| *v != visual);
        self.journal.push(SinkOp::Unmount { visual });
        true
    }

    fn is_mounted(&self, visual: Visual) -> bool {
        self.mounted.contains(&visual)
    }

    fn draw_box(&mut self, paint: BoxPaint) {
        self.journal.push(SinkOp::DrawBox { paint });
    }

    fn draw_wire(&mut self, paint: WirePaint) {
        self.journal.push(SinkOp::DrawWire { paint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_is_idempotent() {
        let mut reg = MountRegistry::new();
        let v = Visual::Box(BoxId::intern("m"));
        assert!(reg.mount(v));
        assert!(!reg.mount(v));
        assert_eq!(reg.mounted(), &[v]);
        assert_eq!(reg.journal().len(), 1);
    }

    #[test]
    fn unmount_unknown_is_noop() {
        let mut reg = MountRegistry::new();
        assert!(!reg.unmount(Visual::Wire(WireId(4))));
        assert!(reg.journal().is_empty());
    }

    #[test]
    fn unmount_keeps_order_of_the_rest() {
        let mut reg = MountRegistry::new();
        let a = Visual::Wire(WireId(0));
        let b = Visual::Wire(WireId(1));
        let c = Visual::Wire(WireId(2));
        for v in [a, b, c] {
            reg.mount(v);
        }
        assert!(reg.unmount(b));
        assert!(!reg.is_mounted(b));
        assert_eq!(reg.mounted(), &[a, c]);
    }

    #[test]
    fn drain_empties_journal() {
        let mut reg = MountRegistry::new();
        reg.mount(Visual::Box(BoxId::intern("d")));
        let ops = reg.drain();
        assert_eq!(ops.len(), 1);
        assert!(reg.journal().is_empty());
        assert!(reg.is_mounted(Visual::Box(BoxId::intern("d"))));
    }

    #[test]
    fn ops_serialize_with_tags() {
        let op = SinkOp::Mount {
            visual: Visual::Box(BoxId::intern("box-1")),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"mount","visual":{"kind":"box","id":"box-1"}}"#);
    }
}
