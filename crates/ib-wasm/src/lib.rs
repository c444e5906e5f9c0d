//! WASM bridge for Idea Board — exposes the board surface to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host forwards pointer
//! and drag events in canvas coordinates, then calls [`IdeaBoard::take_ops`]
//! and replays the mount/draw operations onto its DOM or canvas.
//!
//! Every call that can report something returns a JSON string:
//! `{"ok":true,...}` on success, `{"ok":false,"error":"..."}` otherwise.

use ib_core::{BoardConfig, BoardSnapshot, BoxId, Result, WireId};
use ib_editor::input::InputEvent;
use ib_editor::surface::{Reaction, Surface};
use ib_render::MountRegistry;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// The board controller held by the page.
#[wasm_bindgen]
pub struct IdeaBoard {
    surface: Surface<MountRegistry>,
}

#[wasm_bindgen]
impl IdeaBoard {
    /// Create a board from a JSON options object. An empty string uses the
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> std::result::Result<IdeaBoard, JsError> {
        console_error_panic_hook_setup();
        Self::with_config(config_json).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Add the initial box the page starts with.
    pub fn bootstrap(&mut self) -> String {
        match self.surface.bootstrap() {
            Ok(id) => json!({ "ok": true, "id": id }).to_string(),
            Err(e) => error_json(&e.to_string()),
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::PointerDown { x, y, target: None })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::PointerMove { x, y })
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::PointerUp { x, y })
    }

    pub fn pointer_leave(&mut self) -> String {
        self.apply(InputEvent::PointerLeave)
    }

    pub fn drag_start(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::DragStart { x, y })
    }

    pub fn drag_end(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::DragEnd { x, y })
    }

    pub fn double_activate(&mut self, x: f32, y: f32) -> String {
        self.apply(InputEvent::DoubleActivate { x, y })
    }

    pub fn cancel_connection(&mut self) -> String {
        self.apply(InputEvent::CancelConnection)
    }

    /// Dispatch an event in its JSON encoding, e.g.
    /// `{"kind":"pointerDown","x":10,"y":20}`.
    pub fn dispatch(&mut self, event_json: &str) -> String {
        match InputEvent::from_json(event_json) {
            Ok(event) => self.apply(event),
            Err(e) => error_json(&e.to_string()),
        }
    }

    /// Replace the text of a box after an edit. Returns `false` for unknown
    /// ids.
    pub fn set_content(&mut self, box_id: &str, content: &str) -> bool {
        self.surface.set_content(BoxId::intern(box_id), content)
    }

    /// The save action: `{"ok":true,"state":{"boxes":[...]}}`.
    pub fn export_state(&self) -> String {
        match self.surface.save_json() {
            Ok(state) => format!(r#"{{"ok":true,"state":{state}}}"#),
            Err(e) => error_json(&e.to_string()),
        }
    }

    /// Restore boxes from an exported state. Returns `{"ok":true,"added":n}`.
    pub fn load_state(&mut self, state_json: &str) -> String {
        let loaded = BoardSnapshot::from_json(state_json)
            .and_then(|snapshot| self.surface.load_snapshot(&snapshot));
        match loaded {
            Ok(added) => json!({ "ok": true, "added": added }).to_string(),
            Err(e) => error_json(&e.to_string()),
        }
    }

    /// Drain the pending surface operations as a JSON array.
    pub fn take_ops(&mut self) -> String {
        let ops = self.surface.sink_mut().drain();
        serde_json::to_string(&ops).unwrap_or_else(|e| {
            log::error!("sink journal serialization failed: {e}");
            "[]".to_string()
        })
    }

    pub fn box_count(&self) -> usize {
        self.surface.boxes.len()
    }

    pub fn wire_count(&self) -> usize {
        self.surface.wires.len()
    }
}

impl IdeaBoard {
    /// Native constructor; the JS constructor wraps its error.
    pub fn with_config(config_json: &str) -> Result<Self> {
        let config = if config_json.trim().is_empty() {
            BoardConfig::default()
        } else {
            BoardConfig::from_json(config_json)?
        };
        Ok(Self {
            surface: Surface::new(config, MountRegistry::new())?,
        })
    }

    fn apply(&mut self, event: InputEvent) -> String {
        let reactions: Vec<ReactionView> = self
            .surface
            .handle(event)
            .into_iter()
            .map(ReactionView::from)
            .collect();
        json!({ "ok": true, "reactions": reactions }).to_string()
    }
}

/// Host-facing shape of a [`Reaction`].
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ReactionView {
    BoxCreated { id: BoxId },
    BoxDeleted { id: BoxId },
    ConnectionStarted { id: BoxId },
    ConnectionCanceled { id: BoxId },
    WireCreated { id: WireId },
    #[serde(rename_all = "camelCase")]
    DragStarted { id: BoxId, grab_x: f32, grab_y: f32 },
    DragRejected { id: BoxId },
    DragCanceled { id: BoxId },
    #[serde(rename_all = "camelCase")]
    BoxMoved { id: BoxId, dx: f32, dy: f32, wire_ends: usize },
    HoverChanged { id: BoxId },
}

impl From<Reaction> for ReactionView {
    fn from(reaction: Reaction) -> Self {
        match reaction {
            Reaction::BoxCreated(id) => Self::BoxCreated { id },
            Reaction::BoxDeleted(id) => Self::BoxDeleted { id },
            Reaction::ConnectionStarted(id) => Self::ConnectionStarted { id },
            Reaction::ConnectionCanceled(id) => Self::ConnectionCanceled { id },
            Reaction::WireCreated(id) => Self::WireCreated { id },
            Reaction::DragStarted(req) => Self::DragStarted {
                id: req.origin_id,
                grab_x: req.grab_offset.dx,
                grab_y: req.grab_offset.dy,
            },
            Reaction::DragRejected(id) => Self::DragRejected { id },
            Reaction::DragCanceled(id) => Self::DragCanceled { id },
            Reaction::BoxMoved(moved) => Self::BoxMoved {
                id: moved.id,
                dx: moved.delta.dx,
                dy: moved.delta.dy,
                wire_ends: moved.wire_ends,
            },
            Reaction::HoverChanged(id) => Self::HoverChanged { id },
        }
    }
}

fn error_json(message: &str) -> String {
    json!({ "ok": false, "error": message }).to_string()
}

/// Set up a panic hook that logs to the browser console.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Idea Board WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn board() -> IdeaBoard {
        IdeaBoard::with_config("").unwrap()
    }

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn config_json_overrides_defaults() {
        let b = IdeaBoard::with_config(r#"{"width":100,"handleSize":10}"#).unwrap();
        assert_eq!(b.surface.config().width, 100.0);
        assert_eq!(b.surface.config().height, 150.0);
        assert!(IdeaBoard::with_config("{not json").is_err());
    }

    #[test]
    fn double_activate_reports_created_box() {
        let mut b = board();
        let v = parse(&b.double_activate(300.0, 200.0));
        assert_eq!(v["ok"], true);
        assert_eq!(v["reactions"][0]["type"], "boxCreated");
        assert_eq!(v["reactions"][0]["id"], "box-0");
        assert_eq!(b.box_count(), 1);
    }

    #[test]
    fn dispatch_rejects_unknown_kind() {
        let mut b = board();
        let v = parse(&b.dispatch(r#"{"kind":"wheel","x":0,"y":0}"#));
        assert_eq!(v["ok"], false);
        assert!(v["error"].as_str().unwrap().contains("wheel"));
    }

    #[test]
    fn connect_through_bridge() {
        let mut b = board();
        b.double_activate(100.0, 100.0);
        b.double_activate(600.0, 100.0);
        b.dispatch(r#"{"kind":"pointerDown","x":125,"y":155}"#);
        let v = parse(&b.pointer_up(865.0, 155.0));
        assert_eq!(v["reactions"][0]["type"], "wireCreated");
        assert_eq!(v["reactions"][0]["id"], 0);
        assert_eq!(b.wire_count(), 1);
    }

    #[test]
    fn drag_reports_delta() {
        let mut b = board();
        b.bootstrap();
        b.pointer_down(300.0, 200.0);
        let v = parse(&b.drag_start(300.0, 200.0));
        assert_eq!(v["reactions"][0]["type"], "dragStarted");
        assert_eq!(v["reactions"][0]["grabX"], -20.0);
        let v = parse(&b.drag_end(310.0, 230.0));
        assert_eq!(v["reactions"][0]["type"], "boxMoved");
        assert_eq!(v["reactions"][0]["dx"], 10.0);
        assert_eq!(v["reactions"][0]["wireEnds"], 0);
    }

    #[test]
    fn take_ops_drains_journal() {
        let mut b = board();
        b.bootstrap();
        let ops = parse(&b.take_ops());
        assert_eq!(ops[0]["op"], "mount");
        assert_eq!(ops[0]["visual"]["id"], "box-0");
        assert_eq!(ops[1]["op"], "drawBox");
        assert_eq!(parse(&b.take_ops()), Value::Array(vec![]));
    }

    #[test]
    fn export_then_load_state() {
        let mut b = board();
        b.bootstrap();
        assert!(b.set_content("box-0", "saved"));
        let v = parse(&b.export_state());
        assert_eq!(v["state"]["boxes"][0]["content"], "saved");

        let mut other = board();
        let v = parse(&other.load_state(&v["state"].to_string()));
        assert_eq!(v, json!({ "ok": true, "added": 1 }));
        assert_eq!(other.box_count(), 1);
        assert_eq!(parse(&other.load_state("{not json"))["ok"], false);
    }
}
