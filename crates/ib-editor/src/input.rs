//! Input abstraction layer.
//!
//! The host translates its native pointer and drag events into canvas-space
//! `InputEvent`s. The set of kinds is closed: anything the host cannot map
//! to one of them is a wiring defect on the host side.

use ib_core::{BoardError, BoxId, Result};
use serde::{Deserialize, Serialize};

/// Every `kind` tag the JSON encoding accepts.
pub const EVENT_KINDS: [&str; 8] = [
    "pointerDown",
    "pointerMove",
    "pointerUp",
    "pointerLeave",
    "dragStart",
    "dragEnd",
    "doubleActivate",
    "cancelConnection",
];

/// What a pointer-down landed on, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "on", content = "id", rename_all = "lowercase")]
pub enum Target {
    /// Empty canvas.
    Canvas,
    /// The body of a box (content and zones).
    Body(BoxId),
    /// The drag handle of a box.
    Handle(BoxId),
}

impl Target {
    pub fn box_id(&self) -> Option<BoxId> {
        match self {
            Self::Canvas => None,
            Self::Body(id) | Self::Handle(id) => Some(*id),
        }
    }
}

/// A normalized input event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputEvent {
    /// Pointer pressed. Without a `target` the surface resolves one by hit
    /// testing.
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        target: Option<Target>,
    },

    PointerMove { x: f32, y: f32 },

    PointerUp { x: f32, y: f32 },

    /// Pointer left the box it was over.
    PointerLeave,

    /// Native drag gesture began at the pointer position.
    DragStart { x: f32, y: f32 },

    /// Native drag gesture dropped at the pointer position.
    DragEnd { x: f32, y: f32 },

    /// Double click / double tap.
    DoubleActivate { x: f32, y: f32 },

    /// Abandon the pending wire start (Escape).
    CancelConnection,
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32, target: Target) -> Self {
        Self::PointerDown {
            x,
            y,
            target: Some(target),
        }
    }

    /// Parse an event from the host's JSON encoding.
    ///
    /// An unrecognized `kind` is reported as [`BoardError::UnknownEvent`]
    /// rather than a generic JSON error: it means the host forwards an
    /// event this engine was never wired for.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or_default();
        if !EVENT_KINDS.contains(&kind) {
            log::error!("unrecognized input event kind `{kind}`");
            return Err(BoardError::UnknownEvent(kind.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}
