//! Surface controller: routes input events to boxes and managers.
//!
//! The surface owns both managers and the render sink. Each call to
//! [`Surface::handle`] runs to completion before the next event; there is
//! no suspension point inside a handler, so no locking is involved.
//!
//! ## Event routing
//!
//! | Event | Effect |
//! |-------|--------|
//! | `PointerDown` | abandon a stale drag; delete zone → delete; action zone → wire start; handle → arm drag |
//! | `PointerMove` | track drag, or hover feedback on the box under the pointer |
//! | `PointerUp` | action zone of the box under the pointer → wire end |
//! | `PointerLeave` | reset hover feedback |
//! | `DragStart` | begin drag of the pressed box if armed and no drag is active, else reject |
//! | `DragEnd` | drop the box that started the drag, propagate its delta to wires |
//! | `DoubleActivate` | create a box on empty canvas |
//! | `CancelConnection` | drop the pending wire start |

use crate::boxes::{BoxManager, Moved};
use crate::entity::{BoxGestures, Press};
use crate::input::{InputEvent, Target};
use crate::wires::WireManager;
use ib_core::{BoardConfig, BoardError, BoardSnapshot, BoxId, BoxNode, DragRequest, Point, Rect, Result, WireId};
use ib_render::RenderSink;
use ib_render::hit::{self, HitPart};
use smallvec::SmallVec;

/// Where the page places its first box.
pub const BOOTSTRAP_POINT: Point = Point::new(300.0, 200.0);

/// Observable outcome of an event, for the host and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    BoxCreated(BoxId),
    BoxDeleted(BoxId),
    ConnectionStarted(BoxId),
    ConnectionCanceled(BoxId),
    WireCreated(WireId),
    DragStarted(DragRequest),
    DragRejected(BoxId),
    /// A drag whose drop never arrived was abandoned by a new press.
    DragCanceled(BoxId),
    BoxMoved(Moved),
    HoverChanged(BoxId),
}

pub type Reactions = SmallVec<[Reaction; 2]>;

pub struct Surface<S: RenderSink> {
    config: BoardConfig,
    pub boxes: BoxManager,
    pub wires: WireManager,
    sink: S,
    /// Box that received the last pointer-down.
    pressed: Option<BoxId>,
    /// Box currently showing hover feedback.
    hovered: Option<BoxId>,
    /// The drag gesture in progress. Only its origin box can be dropped.
    drag: Option<DragRequest>,
}

impl<S: RenderSink> Surface<S> {
    /// Create an empty surface. The configuration is validated first.
    pub fn new(config: BoardConfig, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            boxes: BoxManager::new(config.handle_size),
            wires: WireManager::new(),
            config,
            sink,
            pressed: None,
            hovered: None,
            drag: None,
        })
    }

    /// Place the initial box the page starts with.
    pub fn bootstrap(&mut self) -> Result<BoxId> {
        self.boxes
            .create_at(BOOTSTRAP_POINT, &self.config, &mut self.sink)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Resolve what a pointer at `(x, y)` is over.
    pub fn target_at(&self, x: f32, y: f32) -> Target {
        match hit::hit_test(self.boxes.list(), x, y, self.config.handle_size) {
            Some(h) if h.part == HitPart::Handle => Target::Handle(h.box_id),
            Some(h) => Target::Body(h.box_id),
            None => Target::Canvas,
        }
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) -> Reactions {
        match event {
            InputEvent::PointerDown { x, y, target } => {
                let target = target.unwrap_or_else(|| self.target_at(x, y));
                self.pointer_down(x, y, target)
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::DragStart { x, y } => self.drag_start(x, y),
            InputEvent::DragEnd { x, y } => self.drag_end(x, y),
            InputEvent::DoubleActivate { x, y } => self.double_activate(x, y),
            InputEvent::CancelConnection => self
                .wires
                .cancel_pending()
                .map(|a| Reaction::ConnectionCanceled(a.id))
                .into_iter()
                .collect(),
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32, target: Target) -> Reactions {
        let mut out = Reactions::new();
        self.pressed = None;
        if let Some(stale) = self.drag.take()
            && self.boxes.cancel_drag(stale.origin_id, &mut self.sink)
        {
            out.push(Reaction::DragCanceled(stale.origin_id));
        }
        let Some(id) = target.box_id() else {
            return out;
        };
        let on_handle = matches!(target, Target::Handle(_));
        let Some(node) = self.boxes.get_mut(id) else {
            log::debug!("pointer-down on unknown box {id}");
            return out;
        };

        match node.press(x, y, on_handle, &self.config) {
            Press::Delete => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                if self.boxes.delete(id, &mut self.wires, &mut self.sink).is_some() {
                    out.push(Reaction::BoxDeleted(id));
                }
            }
            Press::ConnectStart(anchor) => {
                self.pressed = Some(id);
                if self.wires.request_connection_start(anchor) {
                    out.push(Reaction::ConnectionStarted(id));
                }
            }
            Press::Armed | Press::Plain => self.pressed = Some(id),
        }
        out
    }

    fn pointer_move(&mut self, x: f32, y: f32) -> Reactions {
        let mut out = Reactions::new();
        if let Some(drag) = self.drag {
            let id = drag.origin_id;
            if self.boxes.get_mut(id).is_some_and(|node| node.track(x, y)) {
                self.boxes.redraw(id, &mut self.sink);
            }
            return out;
        }

        let hit = hit::hit_test(self.boxes.list(), x, y, self.config.handle_size);
        let under = hit.map(|h| h.box_id);
        if self.hovered != under
            && let Some(prev) = self.hovered.take()
        {
            self.leave_box(prev, &mut out);
        }
        if let Some(h) = hit {
            self.hovered = Some(h.box_id);
            let changed = self
                .boxes
                .get_mut(h.box_id)
                .is_some_and(|node| node.hover(x, y, h.part == HitPart::Handle, &self.config));
            if changed {
                self.boxes.redraw(h.box_id, &mut self.sink);
                out.push(Reaction::HoverChanged(h.box_id));
            }
        }
        out
    }

    fn pointer_leave(&mut self) -> Reactions {
        let mut out = Reactions::new();
        if let Some(prev) = self.hovered.take() {
            self.leave_box(prev, &mut out);
        }
        out
    }

    fn leave_box(&mut self, id: BoxId, out: &mut Reactions) {
        if self.boxes.get_mut(id).is_some_and(|node| node.leave()) {
            self.boxes.redraw(id, &mut self.sink);
            out.push(Reaction::HoverChanged(id));
        }
    }

    fn pointer_up(&mut self, x: f32, y: f32) -> Reactions {
        let mut out = Reactions::new();
        // A press that did not turn into a drag no longer arms anything.
        if let Some(id) = self.pressed.take()
            && let Some(node) = self.boxes.get_mut(id)
            && !node.is_dragging()
        {
            node.armed = false;
        }

        let anchor = hit::body_at(self.boxes.list(), x, y)
            .and_then(|node| node.release_anchor(x, y, &self.config));
        if let Some(anchor) = anchor
            && let Some(wire) = self.wires.request_connection_end(anchor, &mut self.sink)
        {
            out.push(Reaction::WireCreated(wire));
        }
        out
    }

    fn drag_start(&mut self, x: f32, y: f32) -> Reactions {
        let mut out = Reactions::new();
        let Some(id) = self.pressed else {
            log::debug!("drag start at ({x}, {y}) without a pressed box");
            return out;
        };
        if let Some(active) = self.drag {
            log::debug!("drag start on {id} while {} is still dragging", active.origin_id);
            out.push(Reaction::DragRejected(id));
            return out;
        }
        let Some(node) = self.boxes.get_mut(id) else {
            return out;
        };
        match node.begin_drag(x, y) {
            Some(request) => {
                self.drag = Some(request);
                self.boxes.redraw(id, &mut self.sink);
                out.push(Reaction::DragStarted(request));
            }
            None => out.push(Reaction::DragRejected(id)),
        }
        out
    }

    fn drag_end(&mut self, x: f32, y: f32) -> Reactions {
        let mut out = Reactions::new();
        let Some(request) = self.drag.take() else {
            log::debug!("drop at ({x}, {y}) without a drag in progress");
            return out;
        };
        if let Some(moved) =
            self.boxes
                .drop_box(request.origin_id, x, y, &mut self.wires, &mut self.sink)
        {
            self.pressed = None;
            out.push(Reaction::BoxMoved(moved));
        }
        out
    }

    fn double_activate(&mut self, x: f32, y: f32) -> Reactions {
        let mut out = Reactions::new();
        if self.boxes.hit_test_any(x, y) {
            return out;
        }
        match self
            .boxes
            .create_at(Point::new(x, y), &self.config, &mut self.sink)
        {
            Ok(id) => out.push(Reaction::BoxCreated(id)),
            Err(e) => log::error!("box creation at ({x}, {y}) failed: {e}"),
        }
        out
    }

    // ─── Content & state ─────────────────────────────────────────────────

    /// Text edit inside a box. Returns `false` for unknown ids.
    pub fn set_content(&mut self, id: BoxId, content: impl Into<String>) -> bool {
        self.boxes.set_content(id, content, &mut self.sink)
    }

    /// Snapshot of all boxes in creation order. Wires are not included.
    pub fn export_state(&self) -> BoardSnapshot {
        self.boxes.export()
    }

    /// The save action: export the board as JSON and log it.
    pub fn save_json(&self) -> Result<String> {
        let json = self.export_state().to_json()?;
        log::info!("board state: {json}");
        Ok(json)
    }

    /// Recreate boxes from a saved snapshot, using the configured size.
    /// Entries whose id is already taken are skipped. Returns the number of
    /// boxes added.
    pub fn load_snapshot(&mut self, snapshot: &BoardSnapshot) -> Result<usize> {
        let mut added = 0;
        for record in &snapshot.boxes {
            let rect = Rect::new(record.x, record.y, self.config.width, self.config.height);
            let node = BoxNode::new(record.id, rect, record.content.clone())?;
            match self.boxes.create(node, &mut self.sink) {
                Ok(_) => added += 1,
                Err(BoardError::DuplicateId(id)) => {
                    log::warn!("snapshot entry {id} skipped: id already used");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(added)
    }
}
